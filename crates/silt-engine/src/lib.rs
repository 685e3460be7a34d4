//! The Silt run loop: perimeter walker plus time-step emission.
//!
//! [`DebugRun::prepare`] reads the project (parameters and 2D grid),
//! extrudes the grid, generates every synthetic field once, and writes the
//! 3D grid; [`DebugRun::emit`] then drives the strictly sequential tick
//! loop, advancing the [`Particle`] and snapshotting all fields into one
//! solution step per tick. Any host failure aborts the run immediately.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod emitter;
mod error;
mod walker;

pub use config::RunParams;
pub use emitter::{run, DebugRun, RunSummary, PARTICLE_GROUP};
pub use error::RunError;
pub use walker::Particle;
