//! Back-off policy for location queries.
//!
//! A query is repeated only when the failure says nothing about the location
//! itself: the endpoint timed out, refused the connection or answered 5xx.
//! Anything the server actually answered (GraphQL errors, a null location, a
//! body that does not parse) is final.

use std::future::Future;
use std::time::Duration;

use crate::error::QueryError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:** timeouts, connection failures and HTTP 5xx responses.
///
/// **Not retriable:** [`QueryError::Graphql`], [`QueryError::NotFound`],
/// [`QueryError::Deserialize`], [`QueryError::InvalidEndpoint`] and HTTP 4xx.
pub(crate) fn is_retriable(err: &QueryError) -> bool {
    match err {
        QueryError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        QueryError::Graphql(_)
        | QueryError::NotFound(_)
        | QueryError::Deserialize { .. }
        | QueryError::InvalidEndpoint { .. } => false,
    }
}

/// Longest single sleep between two attempts.
const MAX_DELAY: Duration = Duration::from_secs(30);

/// Un-jittered sleep before retry number `retry` (1-based): the base doubles
/// per retry up to [`MAX_DELAY`].
fn base_delay(retry: u32, backoff_base_ms: u64) -> Duration {
    let shift = retry.saturating_sub(1).min(10);
    Duration::from_millis(backoff_base_ms.saturating_mul(1 << shift)).min(MAX_DELAY)
}

/// Spreads concurrent clients apart by scaling `delay` into `[75 %, 125 %)`.
fn with_jitter(delay: Duration) -> Duration {
    delay.mul_f64(rand::random_range(0.75..1.25))
}

/// Runs a location query, retrying transient failures up to `max_retries` times.
///
/// Each retry waits [`base_delay`] with jitter applied. Anything
/// [`is_retriable`] rejects is returned on the first occurrence.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, QueryError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, QueryError>>,
{
    let mut retries = 0u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if retries == max_retries || !is_retriable(&err) {
            return Err(err);
        }
        retries += 1;
        let delay = with_jitter(base_delay(retries, backoff_base_ms));
        tracing::warn!(
            retry = retries,
            max_retries,
            delay = ?delay,
            error = %err,
            "location query failed transiently, backing off"
        );
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    fn deserialize_err() -> QueryError {
        let src = serde_json::from_str::<()>("invalid").unwrap_err();
        QueryError::Deserialize {
            context: "test".to_owned(),
            source: src,
        }
    }

    async fn connect_error() -> QueryError {
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:1")
            .send()
            .await
            .unwrap_err();
        QueryError::Http(err)
    }

    #[test]
    fn graphql_error_is_not_retriable() {
        assert!(!is_retriable(&QueryError::Graphql("bad".to_owned())));
    }

    #[test]
    fn not_found_is_not_retriable() {
        assert!(!is_retriable(&QueryError::NotFound("7".to_owned())));
    }

    #[test]
    fn deserialize_error_is_not_retriable() {
        assert!(!is_retriable(&deserialize_err()));
    }

    #[tokio::test]
    async fn connect_error_is_retriable() {
        assert!(is_retriable(&connect_error().await));
    }

    #[test]
    fn base_delay_doubles_per_retry() {
        assert_eq!(base_delay(1, 500), Duration::from_millis(500));
        assert_eq!(base_delay(2, 500), Duration::from_millis(1_000));
        assert_eq!(base_delay(4, 500), Duration::from_millis(4_000));
    }

    #[test]
    fn base_delay_is_capped() {
        assert_eq!(base_delay(8, 500), MAX_DELAY);
        assert_eq!(base_delay(u32::MAX, u64::MAX), MAX_DELAY);
    }

    #[test]
    fn jitter_stays_within_a_quarter() {
        let delay = Duration::from_millis(1_000);
        for _ in 0..100 {
            let jittered = with_jitter(delay);
            assert!(jittered >= Duration::from_millis(750), "{jittered:?}");
            assert!(jittered < Duration::from_millis(1_250), "{jittered:?}");
        }
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, QueryError>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn does_not_retry_not_found() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(QueryError::NotFound("7".to_owned()))
            }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1, "NotFound must not be retried");
        assert!(matches!(result, Err(QueryError::NotFound(_))));
    }

    #[tokio::test]
    async fn retries_then_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                let attempt = c.fetch_add(1, Ordering::SeqCst) + 1;
                if attempt < 3 {
                    Err::<u32, _>(connect_error().await)
                } else {
                    Ok(99)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 99, "should succeed after retries");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(1, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(connect_error().await)
            }
        })
        .await;
        assert!(matches!(result, Err(QueryError::Http(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
