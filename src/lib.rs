//! Insertion-ordered constraint container for optimization model backends.
//!
//! Model representations that feed solver interfaces need their constraints
//! in a stable, reproducible order: the order in which the modeling layer
//! attached them. This crate provides that container:
//!
//! - **[`model::Constraint`]**: a shared constraint handle carrying the
//!   ordering index the container manages.
//! - **[`model::OrderedConstraintSet`]**: the container itself. Stamps each
//!   added constraint with a monotonically increasing index and iterates in
//!   ascending index (= insertion) order.
//!
//! # Design
//!
//! This crate defines the membership layer only. Constraint bodies
//! (expressions, bounds, duals) and solver machinery belong to consumer
//! layers; the container manages exactly one field of the constraint, its
//! insertion index, and nothing else.

pub mod model;
