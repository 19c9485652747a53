//! View-state resolution for the location detail page.
//!
//! A page is a pure projection of `(LocationId, QueryOutcome)`:
//! [`resolve`] turns the pair into a [`RenderModel`], [`PageSession`] tracks
//! which identifier is current so late results for an old one are dropped,
//! and [`load`]/[`spawn_load`] drive any [`odyssey_core::LocationSource`].

mod loader;
mod model;
mod outcome;
mod resolve;
pub mod route;
mod session;

pub use loader::{load, spawn_load};
pub use model::{
    ActivitiesSection, ActivityCard, LocationPage, RatingDisplay, RenderModel, ReviewItem,
    ReviewsSection, StatsDisplay, SubmitReviewProps,
};
pub use outcome::{QueryOutcome, Settled};
pub use resolve::{compose_activities, compose_reviews, resolve};
pub use session::{Applied, PageSession};
