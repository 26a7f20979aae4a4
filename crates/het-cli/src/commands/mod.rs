//! CLI command implementations.

pub mod common;
pub mod curvature;
pub mod track;
pub mod version;
