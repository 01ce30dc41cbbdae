//! CLI command implementations

pub mod bake;
pub mod json_output;
