//! Project-file host boundary for the Silt debug-dataset generator.
//!
//! The generator talks to its host through two narrow traits:
//! [`ProjectReader`] for the grid and named parameters, and
//! [`SolutionWriter`] for everything emitted per solution step. Core logic
//! never touches bytes; the flat wire order lives entirely inside this
//! crate.
//!
//! [`ProjectFile`] is the concrete implementation: a simple length-prefixed
//! little-endian binary format (magic `b"SILT"`) holding the parameter
//! table, the 2D grid, and an append-only solution section of tagged
//! records. [`SolutionReader`] decodes the solution section back for
//! verification.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use silt_grid::Grid2d;
//! use silt_project::{ParamTable, ParamValue, ProjectFile, ProjectReader, SolutionWriter};
//!
//! let grid = Grid2d::from_flat(2, 2, vec![0.0, 1.0, 0.0, 1.0], vec![0.0, 0.0, 1.0, 1.0]).unwrap();
//! let mut params = ParamTable::new();
//! params.insert("time_end".into(), ParamValue::Integer(3));
//!
//! // Author a project in memory, then reopen and read it back.
//! let file = ProjectFile::create(Cursor::new(Vec::new()), &params, &grid).unwrap();
//! let mut reopened = ProjectFile::open(file.into_inner()).unwrap();
//! assert_eq!(reopened.grid2d_size().unwrap(), (2, 2));
//! assert_eq!(reopened.read_integer("time_end").unwrap(), 3);
//! reopened.clear_solution().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
mod error;
mod file;
mod params;
mod reader;
mod traits;

pub use error::ProjectError;
pub use file::{ProjectFile, ProjectIo};
pub use params::{ParamTable, ParamValue};
pub use reader::{SolutionReader, SolutionRecord};
pub use traits::{ProjectReader, SolutionWriter};

/// Magic bytes at the start of every Silt project file.
pub const MAGIC: [u8; 4] = *b"SILT";

/// Current project-file format version.
pub const FORMAT_VERSION: u8 = 1;
