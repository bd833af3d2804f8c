//! Crate-level error type for row-index contract violations.

use thiserror::Error;

/// Error raised when an operation is handed a row index that is not currently
/// valid in the roster.
///
/// A correct host re-derives indices from current list state after every
/// mutation, so this never surfaces to a user; seeing it means a caller
/// cached an index across a mutation. The store reports it as an error rather
/// than panicking; hosts that want to crash on it in debug builds can do so
/// at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The index falls outside `[0, len)` for the current roster.
    #[error("row index {index} out of range (roster has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_display() {
        let err = RosterError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "row index 5 out of range (roster has 3 rows)"
        );
    }
}
