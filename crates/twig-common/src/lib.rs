//! Common utilities for the twig parser.
//!
//! This crate provides shared infrastructure used by the parser crates:
//! - **Warning System** - deduplicated diagnostics routed through `tracing`
//! - **Source Positions** - byte offset to line/column conversion for errors

pub mod position;
pub mod warning;

pub use position::Position;
pub use warning::{clear_warnings, warn_once};
