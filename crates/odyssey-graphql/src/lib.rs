//! GraphQL query executor for the location detail page.
//!
//! Issues the fixed `getLocationDetails` document, parses the response into
//! [`odyssey_core::LocationPayload`] and collapses every failure mode into a
//! single [`QueryError`] whose message is safe to show to the user.

mod client;
mod error;
mod query;
mod retry;
mod types;

pub use client::{ClientOptions, GraphqlClient};
pub use error::QueryError;
pub use query::{LOCATION_DETAILS_OPERATION, LOCATION_DETAILS_QUERY};
