//! Form View-Model
//!
//! Maps the result of a create-record POST onto the form's reaction: a
//! confirmed write clears the fields and triggers exactly one table
//! reload; anything else surfaces a message and leaves the fields
//! populated for correction.

use crate::api::ApiError;

/// What a submitted form should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved,
    Rejected(String),
}

impl SubmitOutcome {
    /// `kontekst` prefixes the user-facing message, e.g.
    /// "Kunne ikke legge til vare".
    pub fn from_result(result: Result<(), ApiError>, kontekst: &str) -> Self {
        match result {
            Ok(()) => SubmitOutcome::Saved,
            Err(err) => SubmitOutcome::Rejected(format!("{}: {}", kontekst, err)),
        }
    }

    /// Drive the form's reaction to the outcome.
    pub fn apply(
        self,
        reset: impl FnOnce(),
        reload: impl FnOnce(),
        varsle: impl FnOnce(String),
    ) {
        match self {
            SubmitOutcome::Saved => {
                reset();
                reload();
            }
            SubmitOutcome::Rejected(melding) => varsle(melding),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_saved_resets_and_reloads_exactly_once() {
        let resets = Cell::new(0u32);
        let reloads = Cell::new(0u32);
        let varsler: RefCell<Vec<String>> = RefCell::new(Vec::new());

        SubmitOutcome::from_result(Ok(()), "Kunne ikke legge til vare").apply(
            || resets.set(resets.get() + 1),
            || reloads.set(reloads.get() + 1),
            |melding| varsler.borrow_mut().push(melding),
        );

        assert_eq!(resets.get(), 1);
        assert_eq!(reloads.get(), 1);
        assert!(varsler.borrow().is_empty());
    }

    #[test]
    fn test_rejected_keeps_fields_and_surfaces_message() {
        let resets = Cell::new(0u32);
        let reloads = Cell::new(0u32);
        let varsler: RefCell<Vec<String>> = RefCell::new(Vec::new());

        let err = ApiError::Http {
            status: 400,
            message: "duplicate id".to_string(),
        };
        SubmitOutcome::from_result(Err(err), "Kunne ikke legge til vare").apply(
            || resets.set(resets.get() + 1),
            || reloads.set(reloads.get() + 1),
            |melding| varsler.borrow_mut().push(melding),
        );

        assert_eq!(resets.get(), 0);
        assert_eq!(reloads.get(), 0);
        assert_eq!(
            varsler.borrow().as_slice(),
            ["Kunne ikke legge til vare: duplicate id"]
        );
    }

    #[test]
    fn test_transport_failure_uses_same_path_as_http_failure() {
        let outcome = SubmitOutcome::from_result(
            Err(ApiError::Transport("nettverksfeil".to_string())),
            "Kunne ikke legge til kunde",
        );
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected("Kunne ikke legge til kunde: nettverksfeil".to_string())
        );
    }
}
