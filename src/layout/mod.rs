//! Relative anchor layout.
//!
//! [`tree`] holds node attributes, [`solver`] resolves multipliers and geometry with a
//! pass-scoped [`cache`], and [`pass`] ties measure/arrange passes to a tree.

pub(crate) mod cache;
pub(crate) mod pass;
pub(crate) mod solver;
pub(crate) mod tree;
