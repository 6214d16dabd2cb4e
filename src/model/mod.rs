//! Model membership layer.
//!
//! # Key Components
//!
//! - **Handles**: [`Constraint`], [`ConstraintRef`] — shared constraint
//!   handles with an ordering index
//! - **Container**: [`OrderedConstraintSet`] — insertion-ordered membership
//! - **Errors**: [`ModelError`] — duplicate-attach and not-a-member
//!
//! # Design
//!
//! Constraints are shared between the modeling layer and the container, but
//! the ordering index has a single writer: only the set that a constraint is
//! attached to may assign or clear it. Detached constraints carry the
//! sentinel index [`UNASSIGNED`].
//!
//! Indices are assigned by a per-set monotonic counter and never reused, so
//! removals leave gaps rather than renumbering the surviving members.

mod constraint;
mod error;
mod set;

pub use constraint::{Constraint, ConstraintRef, UNASSIGNED};
pub use error::ModelError;
pub use set::OrderedConstraintSet;
