//! Outcome dispatch and nested composition.

use odyssey_core::{coalesce_rating, ActivityPayload, LocationId, LocationPayload, ReviewPayload};

use crate::model::{
    ActivitiesSection, ActivityCard, LocationPage, RatingDisplay, RenderModel, ReviewItem,
    ReviewsSection, StatsDisplay, SubmitReviewProps,
};
use crate::outcome::QueryOutcome;

/// Maps the current outcome for `id` onto what the page displays.
///
/// `Pending` and `Failed` short-circuit to their fallbacks; composition only
/// runs for `Succeeded`. The function has no side effects.
#[must_use]
pub fn resolve(id: &LocationId, outcome: &QueryOutcome) -> RenderModel {
    match outcome {
        QueryOutcome::Pending => RenderModel::Loading,
        QueryOutcome::Failed { message } => RenderModel::Error {
            message: message.clone(),
        },
        QueryOutcome::Succeeded { payload } => {
            RenderModel::Page(Box::new(compose_page(id, payload)))
        }
    }
}

fn compose_page(id: &LocationId, payload: &LocationPayload) -> LocationPage {
    LocationPage {
        location_id: id.clone(),
        name: payload.name.clone(),
        description: payload.description.clone(),
        photo_url: payload.photo_url.clone(),
        rating: RatingDisplay {
            rating: coalesce_rating(payload.overall_rating),
            review_count: payload.review_count(),
        },
        stats: StatsDisplay {
            stats: payload.stats.clone(),
            terrain: payload.terrain.clone(),
        },
        activities: compose_activities(&payload.activities),
        reviews: compose_reviews(&payload.reviews),
        submit_review: SubmitReviewProps {
            location_id: id.clone(),
        },
    }
}

/// Projects reviews in server order, or the "no reviews yet" sentinel.
#[must_use]
pub fn compose_reviews(reviews: &[ReviewPayload]) -> ReviewsSection {
    if reviews.is_empty() {
        return ReviewsSection::NoReviewsYet;
    }
    ReviewsSection::Reviews(
        reviews
            .iter()
            .map(|r| ReviewItem {
                key: format!("{}-{}", r.id, r.rating),
                comment: r.comment.clone(),
                rating: r.rating,
            })
            .collect(),
    )
}

/// Projects activities in server order; `None` when there are none.
#[must_use]
pub fn compose_activities(activities: &[ActivityPayload]) -> Option<ActivitiesSection> {
    if activities.is_empty() {
        return None;
    }
    Some(ActivitiesSection {
        cards: activities
            .iter()
            .map(|a| ActivityCard {
                id: a.id.clone(),
                name: a.name.clone(),
                photo_url: a.photo_url.clone(),
                terrain: a.terrain.clone(),
            })
            .collect(),
    })
}
