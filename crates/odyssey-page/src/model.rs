//! Render models handed to presentation collaborators.

use odyssey_core::{LocationId, StatsPayload};
use serde::Serialize;

/// What the page shows for one `(identifier, outcome)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RenderModel {
    /// Spinner; nothing else is rendered.
    Loading,
    /// Error fallback carrying the executor's message verbatim.
    Error { message: String },
    Page(Box<LocationPage>),
}

impl RenderModel {
    #[must_use]
    pub fn as_page(&self) -> Option<&LocationPage> {
        match self {
            RenderModel::Page(page) => Some(&**page),
            RenderModel::Loading | RenderModel::Error { .. } => None,
        }
    }
}

/// Fully populated detail page for a location that was fetched successfully.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPage {
    pub location_id: LocationId,
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub rating: RatingDisplay,
    pub stats: StatsDisplay,
    /// `None` when the location has no activities: the section is omitted,
    /// not shown empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<ActivitiesSection>,
    pub reviews: ReviewsSection,
    pub submit_review: SubmitReviewProps,
}

/// Input for the rating display.
///
/// `rating` and `review_count` come from different fields and may disagree
/// (a `0.0` rating next to several reviews is valid).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingDisplay {
    pub rating: f64,
    pub review_count: usize,
}

/// Input for the stats display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsDisplay {
    pub stats: StatsPayload,
    pub terrain: String,
}

/// "Things to do" section; only built from a non-empty activity list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitiesSection {
    pub cards: Vec<ActivityCard>,
}

/// Link card for one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCard {
    pub id: String,
    pub name: String,
    pub photo_url: String,
    pub terrain: String,
}

impl ActivityCard {
    /// Route of the activity detail page this card links to.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/activity/{}", self.id)
    }

    /// Small caption above the card title, e.g. `ROCKY ACTIVITY`.
    #[must_use]
    pub fn kicker(&self) -> String {
        format!("{} ACTIVITY", self.terrain.to_uppercase())
    }
}

/// Reviews area of the page.
///
/// An empty review list is a distinct state with its own message, never an
/// empty `Reviews` vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum ReviewsSection {
    NoReviewsYet,
    Reviews(Vec<ReviewItem>),
}

impl ReviewsSection {
    #[must_use]
    pub fn items(&self) -> &[ReviewItem] {
        match self {
            ReviewsSection::NoReviewsYet => &[],
            ReviewsSection::Reviews(items) => items,
        }
    }
}

/// One review as displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewItem {
    /// Render key built from the review id and rating, not its position.
    pub key: String,
    pub comment: String,
    pub rating: f64,
}

/// Props for the review submission form; it only needs to know where to post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReviewProps {
    pub location_id: LocationId,
}
