//! Core types for the Silt synthetic debug-dataset generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! structured-grid shape vocabulary ([`GridShape`], [`Entity`]) and the
//! [`Array3`] storage type that owns the index-to-flat-offset conversion
//! used everywhere a multi-dimensional field crosses the host boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod array;
mod shape;

pub use array::Array3;
pub use shape::{Entity, GridShape};
