//! Constraint handles and index bookkeeping.

use std::cell::Cell;
use std::rc::Rc;

/// Sentinel index carried by a constraint that is not attached to any set.
pub const UNASSIGNED: i64 = -1;

/// A constraint in an optimization model.
///
/// The constraint body (expression, bounds, activity state) lives in the
/// consumer layer. This handle carries only an identity, a diagnostic name,
/// and the insertion index that
/// [`OrderedConstraintSet`](super::OrderedConstraintSet) manages.
///
/// Constraints are shared: the modeling layer, solver interfaces, and the
/// ordered set may all hold references to the same constraint, so the
/// canonical handle is [`ConstraintRef`].
///
/// # Examples
///
/// ```
/// use conset::model::{Constraint, UNASSIGNED};
///
/// let con = Constraint::new("demand_balance");
/// assert_eq!(con.name(), "demand_balance");
/// assert_eq!(con.index(), UNASSIGNED);
/// assert!(!con.is_attached());
/// ```
#[derive(Debug)]
pub struct Constraint {
    /// Name for diagnostics. Uniqueness is not required.
    name: String,
    /// Insertion index, [`UNASSIGNED`] while detached.
    ///
    /// Interior mutability keeps the handle shareable while the setters stay
    /// crate-private: only the set a constraint is attached to writes here.
    index: Cell<i64>,
}

/// Shared handle to a [`Constraint`].
pub type ConstraintRef = Rc<Constraint>;

impl Constraint {
    /// Creates a detached constraint handle.
    pub fn new(name: impl Into<String>) -> ConstraintRef {
        Rc::new(Self {
            name: name.into(),
            index: Cell::new(UNASSIGNED),
        })
    }

    /// Constraint name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current insertion index, or [`UNASSIGNED`] if detached.
    pub fn index(&self) -> i64 {
        self.index.get()
    }

    /// Whether this constraint is currently attached to a set.
    pub fn is_attached(&self) -> bool {
        self.index.get() != UNASSIGNED
    }

    pub(crate) fn set_index(&self, index: i64) {
        self.index.set(index);
    }

    pub(crate) fn clear_index(&self) {
        self.index.set(UNASSIGNED);
    }
}
