//! Deterministic synthetic fields for the Silt debug-dataset generator.
//!
//! Everything here is a pure function of grid indices: identity index
//! fields let a viewer verify indexing and ordering visually, and the
//! fractional-index [`VectorField`] gives each node a small vector that
//! grows along each axis independently.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod index;
mod vector;

pub use index::{Axis, IndexFields};
pub use vector::VectorField;
