//! CLI command implementations.

pub mod alignment;
pub mod check;
pub mod list;
