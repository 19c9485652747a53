use odyssey_core::{LocationId, LocationPayload};

/// Where a location fetch currently stands.
///
/// Exactly one variant holds at a time. For a given identifier the only
/// transitions are `Pending -> Failed` and `Pending -> Succeeded`.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Pending,
    Failed { message: String },
    Succeeded { payload: LocationPayload },
}

impl QueryOutcome {
    /// Folds the `{pending, error, data}` triple some executors expose into
    /// a single outcome.
    ///
    /// `pending` wins over everything, then `error`, then `data`. With no
    /// error and no data the fetch has not settled yet, so the result is
    /// `Pending`.
    #[must_use]
    pub fn from_parts(
        pending: bool,
        error: Option<String>,
        data: Option<LocationPayload>,
    ) -> Self {
        if pending {
            return Self::Pending;
        }
        match (error, data) {
            (Some(message), _) => Self::Failed { message },
            (None, Some(payload)) => Self::Succeeded { payload },
            (None, None) => Self::Pending,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// A terminal outcome tagged with the identifier it was requested for.
#[derive(Debug, Clone, PartialEq)]
pub struct Settled {
    pub location_id: LocationId,
    pub outcome: QueryOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> LocationPayload {
        serde_json::from_value(serde_json::json!({ "id": "1", "name": "Mars" })).unwrap()
    }

    #[test]
    fn pending_flag_wins() {
        let outcome = QueryOutcome::from_parts(true, Some("boom".into()), Some(payload()));
        assert_eq!(outcome, QueryOutcome::Pending);
    }

    #[test]
    fn error_wins_over_data() {
        let outcome = QueryOutcome::from_parts(false, Some("boom".into()), Some(payload()));
        assert_eq!(
            outcome,
            QueryOutcome::Failed {
                message: "boom".into()
            }
        );
    }

    #[test]
    fn data_without_error_succeeds() {
        let outcome = QueryOutcome::from_parts(false, None, Some(payload()));
        assert!(matches!(outcome, QueryOutcome::Succeeded { .. }));
        assert!(outcome.is_terminal());
    }

    #[test]
    fn nothing_yet_is_pending() {
        let outcome = QueryOutcome::from_parts(false, None, None);
        assert!(!outcome.is_terminal());
    }
}
