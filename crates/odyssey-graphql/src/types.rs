//! GraphQL request and response envelopes.

use odyssey_core::LocationPayload;
use serde::{Deserialize, Serialize};

/// Body of the `POST` sent to the GraphQL endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphqlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LocationVariables<'a> {
    pub location_id: &'a str,
}

/// Standard GraphQL response: `{ "data": ..., "errors": [...] }`.
///
/// Both members are optional; a server may return partial data alongside
/// errors.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlErrorItem {
    pub message: String,
}

/// `data` member of the `getLocationDetails` response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocationData {
    pub location: Option<LocationPayload>,
}
