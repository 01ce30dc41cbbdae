//! rapidframe CLI library.
//!
//! Input loading, the bake pipeline, and console/JSON reporting for the
//! `rapidframe-bake` binary.

pub mod commands;
pub mod input;
