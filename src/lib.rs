//! Collision statistics pipeline.
//!
//! Load a year of motor-vehicle-collision records from a CSV export,
//! resolve the schema, clean the rows, and compute every summary the
//! viewer can display. The flow is strictly one-directional:
//! loader → schema → cleaner → stats; the binary's menu only reads the
//! final [`stats::CrashSummary`].

pub mod charts;
pub mod cleaner;
pub mod loader;
pub mod output;
pub mod schema;
pub mod stats;
pub mod types;
pub mod util;
