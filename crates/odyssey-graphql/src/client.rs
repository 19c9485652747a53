//! HTTP client for the location GraphQL endpoint.
//!
//! Wraps `reqwest` with the fixed `getLocationDetails` request, envelope
//! checking and typed response deserialization. GraphQL-level errors are
//! surfaced as [`QueryError::Graphql`]; a `null` location as
//! [`QueryError::NotFound`].

use std::time::Duration;

use odyssey_core::{AppConfig, LocationId, LocationPayload, LocationSource};
use reqwest::{header, Client, Url};

use crate::error::QueryError;
use crate::query::{LOCATION_DETAILS_OPERATION, LOCATION_DETAILS_QUERY};
use crate::retry::retry_with_backoff;
use crate::types::{GraphqlRequest, GraphqlResponse, LocationData, LocationVariables};

/// Transport settings for [`GraphqlClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub api_token: Option<String>,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "odyssey/0.1 (location-page)".to_string(),
            api_token: None,
            max_retries: 2,
            retry_backoff_base_ms: 500,
        }
    }
}

impl From<&AppConfig> for ClientOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
            api_token: config.api_token.clone(),
            max_retries: config.max_retries,
            retry_backoff_base_ms: config.retry_backoff_base_ms,
        }
    }
}

/// Client for the location GraphQL endpoint.
///
/// Use [`GraphqlClient::new`] with the loaded [`AppConfig`], or
/// [`GraphqlClient::with_endpoint`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: Client,
    endpoint: Url,
    api_token: Option<String>,
    max_retries: u32,
    retry_backoff_base_ms: u64,
}

impl GraphqlClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`QueryError::InvalidEndpoint`] if the
    /// configured URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, QueryError> {
        Self::with_endpoint(&config.graphql_url, ClientOptions::from(config))
    }

    /// Creates a client for an explicit endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`QueryError::InvalidEndpoint`] if
    /// `endpoint` is not a valid URL.
    pub fn with_endpoint(endpoint: &str, options: ClientOptions) -> Result<Self, QueryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(options.user_agent.as_str())
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| QueryError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            endpoint,
            api_token: options.api_token,
            max_retries: options.max_retries,
            retry_backoff_base_ms: options.retry_backoff_base_ms,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches the full location graph for `id`.
    ///
    /// Transient failures (timeouts, connection errors, 5xx) are retried
    /// with back-off before an error is returned.
    ///
    /// # Errors
    ///
    /// - [`QueryError::Graphql`] if the response carries GraphQL errors.
    /// - [`QueryError::NotFound`] if the server returns `location: null`.
    /// - [`QueryError::Http`] on network failure or non-2xx HTTP status.
    /// - [`QueryError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn get_location_details(
        &self,
        id: &LocationId,
    ) -> Result<LocationPayload, QueryError> {
        tracing::debug!(location_id = %id, endpoint = %self.endpoint, "fetching location details");

        let envelope: GraphqlResponse<LocationData> =
            retry_with_backoff(self.max_retries, self.retry_backoff_base_ms, || {
                self.post_location_query(id)
            })
            .await?;

        let payload = Self::extract_location(envelope, id)?;
        tracing::debug!(
            location_id = %id,
            reviews = payload.reviews.len(),
            activities = payload.activities.len(),
            "location details fetched"
        );
        Ok(payload)
    }

    /// Builds the request body for the `getLocationDetails` operation.
    fn build_body(id: &LocationId) -> GraphqlRequest<'_, LocationVariables<'_>> {
        GraphqlRequest {
            query: LOCATION_DETAILS_QUERY,
            operation_name: LOCATION_DETAILS_OPERATION,
            variables: LocationVariables {
                location_id: id.as_str(),
            },
        }
    }

    /// Sends one `POST`, asserts a 2xx status, and parses the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Http`] on network failure or a non-2xx status.
    /// Returns [`QueryError::Deserialize`] if the body is not a GraphQL
    /// response.
    async fn post_location_query(
        &self,
        id: &LocationId,
    ) -> Result<GraphqlResponse<LocationData>, QueryError> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .json(&Self::build_body(id));
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| QueryError::Deserialize {
            context: format!("{LOCATION_DETAILS_OPERATION}(locationId={id})"),
            source: e,
        })
    }

    /// Applies the envelope rules: errors win over data, and a missing
    /// location is reported as not found.
    fn extract_location(
        envelope: GraphqlResponse<LocationData>,
        id: &LocationId,
    ) -> Result<LocationPayload, QueryError> {
        if !envelope.errors.is_empty() {
            let message = envelope
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(QueryError::Graphql(message));
        }

        envelope
            .data
            .and_then(|d| d.location)
            .ok_or_else(|| QueryError::NotFound(id.to_string()))
    }
}

impl LocationSource for GraphqlClient {
    type Error = QueryError;

    async fn fetch_location(&self, id: &LocationId) -> Result<LocationPayload, QueryError> {
        self.get_location_details(id).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
