//! Database error handling utilities
//!
//! Constraint violations are the storage layer's authoritative verdict on
//! racy invariants; these helpers translate them back into the domain
//! error the pre-check would have produced.

use sqlx::Error as SqlxError;

/// Check if the error is a unique constraint violation
pub fn is_unique_violation(error: &SqlxError) -> bool {
    if let SqlxError::Database(db_err) = error {
        return db_err.is_unique_violation();
    }
    false
}

/// Check if the error is a foreign key violation
pub fn is_foreign_key_violation(error: &SqlxError) -> bool {
    if let SqlxError::Database(db_err) = error {
        return db_err.is_foreign_key_violation();
    }
    false
}

/// Map a unique-constraint violation to `unique_error`, wrapping anything
/// else with `default_wrapper`.
pub fn map_unique_violation<E, F>(error: SqlxError, unique_error: E, default_wrapper: F) -> E
where
    F: FnOnce(SqlxError) -> E,
{
    if is_unique_violation(&error) {
        unique_error
    } else {
        default_wrapper(error)
    }
}

/// Map a foreign-key violation to `fk_error`, wrapping anything else with
/// `default_wrapper`.
pub fn map_foreign_key_violation<E, F>(error: SqlxError, fk_error: E, default_wrapper: F) -> E
where
    F: FnOnce(SqlxError) -> E,
{
    if is_foreign_key_violation(&error) {
        fk_error
    } else {
        default_wrapper(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_pass_through() {
        let err = SqlxError::RowNotFound;
        assert!(!is_unique_violation(&err));
        assert!(!is_foreign_key_violation(&err));

        let mapped = map_unique_violation(SqlxError::RowNotFound, "dup", |_| "other");
        assert_eq!(mapped, "other");
    }
}
