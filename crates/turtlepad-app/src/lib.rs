//! TurtlePad native runner.
//!
//! Runs the built-in demo program against the in-memory backends, replays the
//! drawing into a Vello scene and reports the final state as JSON.

pub mod app;
pub mod demo;

pub use app::{AppError, Snapshot, load_config, run, write_snapshot};
