/// Operation name sent alongside [`LOCATION_DETAILS_QUERY`].
pub const LOCATION_DETAILS_OPERATION: &str = "getLocationDetails";

/// The fixed field shape fetched for one location page.
///
/// The only variable is `$locationId`.
pub const LOCATION_DETAILS_QUERY: &str = r"query getLocationDetails($locationId: ID!) {
  location(id: $locationId) {
    id
    name
    description
    photo
    overallRating
    terrain
    stats {
      gravity
      averageTemperature
      lengthOfDay
      minimumAge
    }
    reviews {
      id
      comment
      rating
    }
    activities {
      id
      name
      photo
      terrain
    }
  }
}
";
