use std::fmt::Display;
use std::future::Future;

use crate::location::{LocationId, LocationPayload};

/// Anything that can fetch the nested graph for one location.
///
/// Implementations must report an unknown or malformed identifier as an
/// error; `Ok` always carries a fully parsed payload. The error's `Display`
/// text is what the page shows verbatim on failure.
pub trait LocationSource {
    type Error: Display;

    fn fetch_location(
        &self,
        id: &LocationId,
    ) -> impl Future<Output = Result<LocationPayload, Self::Error>> + Send;
}
