//! rapidframe End-to-End Test Infrastructure
//!
//! - [`harness`]: runs the `rapidframe-bake` binary against temp directories
//! - [`fixtures`]: builds content input directories
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rapidframe-tests
//!
//! # Against a prebuilt binary
//! RAPIDFRAME_BIN=target/release/rapidframe-bake cargo test -p rapidframe-tests
//! ```

pub mod fixtures;
pub mod harness;
