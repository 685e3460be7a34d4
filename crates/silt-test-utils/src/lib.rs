//! Test utilities and mock host implementations for Silt development.
//!
//! Provides [`RecordingProject`], an in-memory implementation of both host
//! traits that logs every write as an ordered [`Event`], plus grid
//! fixtures for constructing test scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;
mod recording;

pub use fixtures::{recording_project, unit_grid};
pub use recording::{Event, RecordingProject};
