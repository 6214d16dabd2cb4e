//! Insertion-ordered constraint storage.

use std::collections::BTreeMap;
use std::rc::Rc;

use super::constraint::{ConstraintRef, UNASSIGNED};
use super::error::ModelError;

/// An insertion-ordered set of constraints.
///
/// Each added constraint is stamped with the next value of a per-set
/// monotonic counter; iteration runs in ascending index order, which
/// therefore equals insertion order. The counter is never reset and indices
/// are never reused, so removals leave gaps rather than renumbering the
/// surviving members.
///
/// Members are stored keyed by their assigned index, and removal verifies
/// handle identity before erasing. A handle whose index was stamped by a
/// different set cannot remove an unrelated member here.
///
/// # Examples
///
/// ```
/// use conset::model::{Constraint, OrderedConstraintSet};
///
/// let mut set = OrderedConstraintSet::new();
/// let supply = Constraint::new("supply");
/// let demand = Constraint::new("demand");
///
/// set.add(&supply)?;
/// set.add(&demand)?;
/// assert_eq!(supply.index(), 0);
/// assert_eq!(demand.index(), 1);
///
/// set.remove(&supply)?;
/// assert_eq!(supply.index(), -1);
/// assert_eq!(set.len(), 1);
/// # Ok::<(), conset::model::ModelError>(())
/// ```
#[derive(Debug, Default)]
pub struct OrderedConstraintSet {
    /// Members keyed by assigned index. Ascending keys = insertion order.
    members: BTreeMap<i64, ConstraintRef>,
    /// Next index to assign. Monotonic for the lifetime of the set.
    next_index: i64,
}

impl OrderedConstraintSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint, stamping it with the next insertion index.
    ///
    /// Returns the assigned index. The constraint becomes last in iteration
    /// order. Fails with [`ModelError::AlreadyAttached`] if the constraint
    /// already carries an index, whether from this set or another one.
    pub fn add(&mut self, con: &ConstraintRef) -> Result<i64, ModelError> {
        if con.is_attached() {
            return Err(ModelError::AlreadyAttached {
                name: con.name().to_string(),
                index: con.index(),
            });
        }
        let index = self.next_index;
        self.next_index += 1;
        con.set_index(index);
        self.members.insert(index, Rc::clone(con));
        Ok(index)
    }

    /// Removes a constraint and resets its index to [`UNASSIGNED`].
    ///
    /// Fails with [`ModelError::NotAMember`] if the constraint is detached
    /// or is attached to a different set. A second remove of the same
    /// constraint therefore also fails, since the first one detached it.
    pub fn remove(&mut self, con: &ConstraintRef) -> Result<(), ModelError> {
        let index = con.index();
        if index == UNASSIGNED {
            return Err(ModelError::NotAMember {
                name: con.name().to_string(),
            });
        }
        match self.members.get(&index) {
            Some(member) if Rc::ptr_eq(member, con) => {
                self.members.remove(&index);
                con.clear_index();
                Ok(())
            }
            _ => Err(ModelError::NotAMember {
                name: con.name().to_string(),
            }),
        }
    }

    /// Whether the constraint is a current member of this set.
    ///
    /// Identity-based: a distinct constraint that happens to carry the same
    /// index (stamped by another set) is not a member.
    pub fn contains(&self, con: &ConstraintRef) -> bool {
        self.members
            .get(&con.index())
            .is_some_and(|member| Rc::ptr_eq(member, con))
    }

    /// Number of member constraints.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ConstraintRef> {
        self.members.values()
    }
}
