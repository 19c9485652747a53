//! Location records as returned by the `getLocationDetails` query.
//!
//! These types are parsed once at the executor boundary; everything downstream
//! works with typed fields rather than raw JSON. Field names follow the
//! GraphQL schema (`camelCase`, `photo` for the image URL).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::CoreError;

/// Opaque identifier of a location, taken from the navigation context.
///
/// The only check is non-emptiness; whether the id refers to a real location
/// is decided by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyLocationId`] for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyLocationId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for LocationId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The nested location graph for one detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPayload {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "photo", default, deserialize_with = "null_as_default")]
    pub photo_url: String,
    #[serde(default)]
    pub overall_rating: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub terrain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: StatsPayload,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<ReviewPayload>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: Vec<ActivityPayload>,
}

impl LocationPayload {
    /// Number of reviews, independent of whether `overall_rating` is present.
    #[must_use]
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

/// Physical statistics handed through untouched to the stats display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload {
    #[serde(default)]
    pub gravity: Option<StatValue>,
    #[serde(default)]
    pub average_temperature: Option<StatValue>,
    #[serde(default)]
    pub length_of_day: Option<StatValue>,
    #[serde(default)]
    pub minimum_age: Option<StatValue>,
}

/// A stat as the server sent it: either a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{n}"),
            StatValue::Text(t) => f.write_str(t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPayload {
    pub id: String,
    pub name: String,
    #[serde(rename = "photo", default, deserialize_with = "null_as_default")]
    pub photo_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub terrain: String,
}

/// Replaces an absent rating with `0.0`.
///
/// A present `0.0` is a real rating and comes back unchanged; only `None`
/// is substituted.
#[must_use]
pub fn coalesce_rating(rating: Option<f64>) -> f64 {
    rating.unwrap_or(0.0)
}

/// Deserializes an explicit `null` the same way as a missing field.
///
/// GraphQL sends `null` for unset nullable scalars and lists.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_id_rejects_blank_input() {
        assert_eq!(LocationId::parse(""), Err(CoreError::EmptyLocationId));
        assert_eq!(LocationId::parse("   "), Err(CoreError::EmptyLocationId));
    }

    #[test]
    fn location_id_keeps_opaque_token() {
        let id = LocationId::parse(" loc-42 ").unwrap();
        assert_eq!(id.as_str(), "loc-42");
        assert_eq!(id.to_string(), "loc-42");
    }

    #[test]
    fn coalesce_rating_only_replaces_absent() {
        assert!((coalesce_rating(None) - 0.0).abs() < f64::EPSILON);
        assert!((coalesce_rating(Some(0.0)) - 0.0).abs() < f64::EPSILON);
        assert!((coalesce_rating(Some(4.5)) - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn payload_parses_graphql_field_names() {
        let json = serde_json::json!({
            "id": "1",
            "name": "Mars",
            "description": "Red planet",
            "photo": "mars.jpg",
            "overallRating": 4.5,
            "terrain": "rocky",
            "stats": {
                "gravity": "0.38g",
                "averageTemperature": -63,
                "lengthOfDay": 24.6,
                "minimumAge": 18
            },
            "reviews": [{ "id": "r1", "comment": "Dusty", "rating": 4 }],
            "activities": [{ "id": "a1", "name": "Hike", "photo": "x.jpg", "terrain": "rocky" }]
        });
        let payload: LocationPayload = serde_json::from_value(json).unwrap();
        assert_eq!(payload.photo_url, "mars.jpg");
        assert_eq!(payload.overall_rating, Some(4.5));
        assert_eq!(
            payload.stats.gravity,
            Some(StatValue::Text("0.38g".to_string()))
        );
        assert_eq!(payload.stats.minimum_age, Some(StatValue::Number(18.0)));
        assert_eq!(payload.review_count(), 1);
        assert_eq!(payload.activities[0].photo_url, "x.jpg");
    }

    #[test]
    fn null_collections_become_empty() {
        let json = serde_json::json!({
            "id": "1",
            "name": "Mars",
            "overallRating": null,
            "reviews": null
        });
        let payload: LocationPayload = serde_json::from_value(json).unwrap();
        assert!(payload.overall_rating.is_none());
        assert!(payload.reviews.is_empty());
        assert!(payload.activities.is_empty());
    }

    #[test]
    fn null_scalars_become_empty_strings() {
        let json = serde_json::json!({
            "id": "1",
            "name": "Mars",
            "description": null,
            "photo": null,
            "terrain": null,
            "stats": null,
            "reviews": [{ "id": "r1", "comment": null, "rating": 4 }],
            "activities": [{ "id": "a1", "name": "Hike", "photo": null, "terrain": null }]
        });
        let payload: LocationPayload = serde_json::from_value(json).unwrap();
        assert_eq!(payload.description, "");
        assert_eq!(payload.photo_url, "");
        assert_eq!(payload.stats, StatsPayload::default());
        assert_eq!(payload.reviews[0].comment, "");
        assert_eq!(payload.activities[0].terrain, "");
    }

    #[test]
    fn review_rating_accepts_fractions() {
        let json = serde_json::json!({
            "id": "1",
            "name": "Mars",
            "reviews": [
                { "id": "r1", "comment": "ok", "rating": 4.5 },
                { "id": "r2", "comment": "fine", "rating": 3 }
            ]
        });
        let payload: LocationPayload = serde_json::from_value(json).unwrap();
        assert!((payload.reviews[0].rating - 4.5).abs() < f64::EPSILON);
        assert!((payload.reviews[1].rating - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stat_value_displays_as_received() {
        assert_eq!(StatValue::Text("0.38g".into()).to_string(), "0.38g");
        assert_eq!(StatValue::Number(24.6).to_string(), "24.6");
    }
}
