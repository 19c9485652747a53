use thiserror::Error;

/// Errors returned by the GraphQL client.
///
/// The page treats every variant the same way: its `Display` text becomes
/// the error fallback message.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-empty `errors` array.
    #[error("{0}")]
    Graphql(String),

    /// `data.location` was `null` for the requested id.
    #[error("location not found: {0}")]
    NotFound(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured endpoint is not a usable URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
