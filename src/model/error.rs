//! Membership error types.

use thiserror::Error;

/// Errors from ordered-set membership operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The constraint already carries an assigned index, from this set or
    /// another one. The index field has a single writer at a time.
    #[error("constraint '{name}' is already attached (index {index})")]
    AlreadyAttached {
        /// Name of the offending constraint.
        name: String,
        /// Index it currently carries.
        index: i64,
    },

    /// The constraint is not a current member of this set.
    #[error("constraint '{name}' is not a member of this set")]
    NotAMember {
        /// Name of the offending constraint.
        name: String,
    },
}
