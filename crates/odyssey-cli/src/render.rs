//! Plain-text presentation of a [`RenderModel`].

use odyssey_core::StatValue;
use odyssey_page::route::location_path;
use odyssey_page::{
    ActivitiesSection, LocationPage, RatingDisplay, RenderModel, ReviewsSection, StatsDisplay,
};

const MAX_STARS: usize = 5;

pub(crate) fn render_text(model: &RenderModel) -> String {
    match model {
        RenderModel::Loading => "Loading...\n".to_string(),
        RenderModel::Error { message } => format!("{message}\n"),
        RenderModel::Page(page) => render_page(page),
    }
}

fn render_page(page: &LocationPage) -> String {
    let mut lines = vec![
        page.name.clone(),
        render_rating(page.rating),
        String::new(),
        format!("[photo] {}", page.photo_url),
        String::new(),
        "About this location".to_string(),
        page.description.clone(),
        String::new(),
        render_stats(&page.stats),
    ];

    if let Some(activities) = &page.activities {
        lines.push(String::new());
        lines.extend(activity_lines(activities));
    }

    lines.push(String::new());
    lines.push("What other space travelers have to say".to_string());
    lines.extend(review_lines(&page.reviews));

    lines.push(String::new());
    lines.push(format!(
        "Leave a review at {}",
        location_path(&page.submit_review.location_id)
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Stars with half-star precision followed by the review count.
fn render_rating(rating: RatingDisplay) -> String {
    format!("{} ({})", stars(rating.rating, true), rating.review_count)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn stars(rating: f64, allow_half: bool) -> String {
    let clamped = rating.clamp(0.0, MAX_STARS as f64);
    let halves = if allow_half {
        (clamped * 2.0).round() as usize
    } else {
        clamped.round() as usize * 2
    };
    let full = halves / 2;
    let half = halves % 2;
    let empty = MAX_STARS - full - half;
    format!(
        "{}{}{}",
        "\u{2605}".repeat(full),
        "\u{00bd}".repeat(half),
        "\u{2606}".repeat(empty)
    )
}

fn render_stats(stats: &StatsDisplay) -> String {
    let field = |value: Option<&StatValue>| {
        value.map_or_else(|| "\u{2014}".to_string(), ToString::to_string)
    };
    format!(
        "Gravity {} | Average temperature {} | Length of day {} | Minimum age {} | Terrain {}",
        field(stats.stats.gravity.as_ref()),
        field(stats.stats.average_temperature.as_ref()),
        field(stats.stats.length_of_day.as_ref()),
        field(stats.stats.minimum_age.as_ref()),
        stats.terrain,
    )
}

fn activity_lines(section: &ActivitiesSection) -> Vec<String> {
    let mut lines = vec!["Things to do".to_string()];
    for card in &section.cards {
        lines.push(format!("  {}", card.kicker()));
        lines.push(format!("  {} -> {}", card.name, card.href()));
        lines.push(format!("  [photo] {}", card.photo_url));
    }
    lines
}

fn review_lines(section: &ReviewsSection) -> Vec<String> {
    match section {
        ReviewsSection::NoReviewsYet => vec!["No reviews yet".to_string()],
        ReviewsSection::Reviews(items) => {
            let mut lines = Vec::with_capacity(items.len() * 3);
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    lines.push("  ---".to_string());
                }
                lines.push(format!("  {}", stars(item.rating, false)));
                lines.push(format!("  {}", item.comment));
            }
            lines
        }
    }
}
