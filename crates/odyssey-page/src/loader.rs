//! Drives a [`LocationSource`] and tags its result with the requested id.

use std::sync::Arc;

use odyssey_core::{LocationId, LocationSource};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::outcome::{QueryOutcome, Settled};

/// Fetches `location_id` once and returns the terminal outcome for it.
///
/// Errors are folded into `Failed` using the source error's `Display` text.
pub async fn load<S>(source: &S, location_id: LocationId) -> Settled
where
    S: LocationSource,
{
    let outcome = match source.fetch_location(&location_id).await {
        Ok(payload) => QueryOutcome::Succeeded { payload },
        Err(e) => {
            let message = e.to_string();
            tracing::warn!(location_id = %location_id, error = %message, "location fetch failed");
            QueryOutcome::Failed { message }
        }
    };
    Settled {
        location_id,
        outcome,
    }
}

/// Runs [`load`] on a background task and sends the result to `tx`.
///
/// A closed receiver means the page was unmounted; the result is dropped.
pub fn spawn_load<S>(
    source: Arc<S>,
    location_id: LocationId,
    tx: mpsc::Sender<Settled>,
) -> JoinHandle<()>
where
    S: LocationSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let settled = load(source.as_ref(), location_id).await;
        if tx.send(settled).await.is_err() {
            tracing::debug!("page unmounted before location fetch settled");
        }
    })
}
