//! Table View-Model
//!
//! Each table owns one `TableState` signal; every fetch replaces the whole
//! body (no diffing), and any failure collapses to a single diagnostic row.

use std::cell::Cell;
use std::rc::Rc;

use crate::api::ApiError;

/// What one table body currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableState<T> {
    Loading,
    Rows(Vec<T>),
    Empty,
    Failed(String),
}

impl<T> TableState<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(rows) if rows.is_empty() => TableState::Empty,
            Ok(rows) => TableState::Rows(rows),
            Err(err) => TableState::Failed(err.to_string()),
        }
    }
}

/// Monotonically increasing request token. `begin` supersedes every
/// earlier request, so when rapid refreshes resolve out of order only the
/// latest one is allowed to touch the table.
#[derive(Clone, Default)]
pub struct RefreshGuard(Rc<Cell<u64>>);

impl RefreshGuard {
    pub fn begin(&self) -> u64 {
        self.0.set(self.0.get() + 1);
        self.0.get()
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vare;

    #[test]
    fn test_state_from_result() {
        let rows = vec![Vare {
            vnr: Some("1".to_string()),
            betegnelse: None,
            pris: None,
            antall: None,
        }];
        assert!(matches!(
            TableState::from_result(Ok(rows)),
            TableState::Rows(v) if v.len() == 1
        ));
        assert_eq!(
            TableState::<Vare>::from_result(Ok(Vec::new())),
            TableState::Empty
        );
        let err = ApiError::Shape("ugyldig".to_string());
        assert_eq!(
            TableState::<Vare>::from_result(Err(err)),
            TableState::Failed("ugyldig".to_string())
        );
    }

    #[test]
    fn test_guard_discards_superseded_requests() {
        let guard = RefreshGuard::default();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_guard_clones_share_state() {
        let guard = RefreshGuard::default();
        let token = guard.begin();
        let clone = guard.clone();
        assert!(clone.is_current(token));
        clone.begin();
        assert!(!guard.is_current(token));
    }
}
