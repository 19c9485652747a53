//! Extracts the location identifier from a navigation path.

use odyssey_core::LocationId;

/// Path prefix of the location detail page.
pub const LOCATION_ROUTE_PREFIX: &str = "/location/";

/// Returns the identifier for paths shaped like `/location/{id}`.
///
/// A trailing slash, query string or fragment is ignored. Any other shape,
/// including a nested path or an empty id, yields `None`.
#[must_use]
pub fn parse_location_route(path: &str) -> Option<LocationId> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let rest = path.strip_prefix(LOCATION_ROUTE_PREFIX)?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.contains('/') {
        return None;
    }
    LocationId::parse(rest).ok()
}

/// Builds the path of the detail page for `id`.
#[must_use]
pub fn location_path(id: &LocationId) -> String {
    format!("{LOCATION_ROUTE_PREFIX}{id}")
}
