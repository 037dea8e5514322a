//! JSON-facing scene description and its builder.

pub(crate) mod dsl;
pub(crate) mod model;
