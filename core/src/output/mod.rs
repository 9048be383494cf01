//! Renderers for diff reports.
//!
//! Renderers are pure functions over a read-only [`crate::DiffReport`]; they
//! never mutate the change set they are handed.

pub mod json;
pub mod markdown;
