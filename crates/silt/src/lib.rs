//! Silt: a synthetic 3D debug-dataset generator for structured river grids.
//!
//! Silt reads a 2D structured grid and scalar parameters from a project
//! file, extrudes the grid into evenly spaced vertical layers, fabricates
//! deterministic index and vector fields, and writes a time series of
//! synthetic solution steps plus a single particle that walks the grid
//! perimeter and climbs one layer per lap. There is no solver and no
//! physics: the output exists to exercise a host application's
//! post-processing and visualization paths with data whose correct
//! appearance is known in advance.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Silt sub-crates. For most users, adding `silt` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::io::Cursor;
//! use silt::prelude::*;
//!
//! // Author a small project in memory (a real host would supply the file).
//! let grid = Grid2d::from_flat(
//!     3, 2,
//!     vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0],
//!     vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
//! ).unwrap();
//! let mut params = ParamTable::new();
//! params.insert("time_end".into(), ParamValue::Integer(2));
//! params.insert("z_division".into(), ParamValue::Integer(1));
//! params.insert("z_height".into(), ParamValue::Real(4.0));
//! let project = ProjectFile::create(Cursor::new(Vec::new()), &params, &grid).unwrap();
//!
//! // Run the generator and read the emitted steps back.
//! let mut project = ProjectFile::open(project.into_inner()).unwrap();
//! let summary = silt::engine::run(&mut project, |_, _| {}).unwrap();
//! assert_eq!(summary.steps_emitted, 3);
//!
//! let mut reader = SolutionReader::open(Cursor::new(project.into_inner().into_inner())).unwrap();
//! let records = reader.read_all().unwrap();
//! assert!(matches!(records[0], SolutionRecord::Grid3d { .. }));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `silt-core` | Grid shapes, entity families, `Array3` storage |
//! | [`grid`] | `silt-grid` | 2D/3D structured grids and vertical extrusion |
//! | [`fields`] | `silt-fields` | Identity index fields and the vector field |
//! | [`project`] | `silt-project` | Host-boundary traits and the binary project file |
//! | [`engine`] | `silt-engine` | Perimeter walker and the emission loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid shapes, entity families, and array storage (`silt-core`).
pub use silt_core as types;

/// Structured grids and vertical extrusion (`silt-grid`).
pub use silt_grid as grid;

/// Deterministic synthetic field generation (`silt-fields`).
pub use silt_fields as fields;

/// Host-boundary traits and the binary project file (`silt-project`).
pub use silt_project as project;

/// The perimeter walker and emission loop (`silt-engine`).
pub use silt_engine as engine;

/// The most commonly used types, re-exported in one place.
pub mod prelude {
    pub use silt_core::{Array3, Entity, GridShape};
    pub use silt_engine::{run, DebugRun, Particle, RunError, RunParams, RunSummary};
    pub use silt_fields::{Axis, IndexFields, VectorField};
    pub use silt_grid::{extrude, Grid2d, Grid3d, GridError};
    pub use silt_project::{
        ParamTable, ParamValue, ProjectError, ProjectFile, ProjectReader, SolutionReader,
        SolutionRecord, SolutionWriter,
    };
}
