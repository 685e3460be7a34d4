//! Structured grids for the Silt debug-dataset generator.
//!
//! [`Grid2d`] holds the planar grid read from the project file; [`extrude`]
//! stacks it into a [`Grid3d`] by replicating x,y across evenly spaced
//! layers from z = 0 to a configured height.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod extrude;
mod grid2d;
mod grid3d;

pub use error::GridError;
pub use extrude::extrude;
pub use grid2d::Grid2d;
pub use grid3d::Grid3d;
