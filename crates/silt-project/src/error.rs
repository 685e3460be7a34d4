//! Error types for the project-file boundary.

use std::fmt;
use std::io;

use silt_grid::GridError;

/// Errors from reading or writing a project file.
///
/// Every host I/O failure is fatal to a run: callers propagate these out
/// with no retry and no partial-output cleanup.
#[derive(Debug)]
pub enum ProjectError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The file does not start with the expected `b"SILT"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the file.
        found: u8,
    },
    /// A record could not be decoded (truncated or corrupt data).
    MalformedRecord {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A solution record tag is not recognized.
    UnknownRecordTag {
        /// The unrecognized tag byte.
        tag: u8,
    },
    /// A named parameter is not present in the parameter table.
    UnknownParameter {
        /// The requested parameter name.
        name: String,
    },
    /// A named parameter has a different type than requested.
    ParameterType {
        /// The requested parameter name.
        name: String,
        /// The type the caller asked for (`"integer"` or `"real"`).
        expected: &'static str,
    },
    /// The stored 2D grid coordinates are malformed.
    Grid(GridError),
    /// A solution field was written before the 3D grid.
    GridNotWritten,
    /// A solution field's element count does not match its entity family.
    FieldLengthMismatch {
        /// The field name being written.
        name: String,
        /// Expected element count for the family.
        expected: usize,
        /// Actual element count supplied.
        actual: usize,
    },
}

impl fmt::Display for ProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"SILT\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::MalformedRecord { detail } => write!(f, "malformed record: {detail}"),
            Self::UnknownRecordTag { tag } => write!(f, "unknown record tag {tag}"),
            Self::UnknownParameter { name } => write!(f, "unknown parameter '{name}'"),
            Self::ParameterType { name, expected } => {
                write!(f, "parameter '{name}' is not {expected}-valued")
            }
            Self::Grid(e) => write!(f, "grid data: {e}"),
            Self::GridNotWritten => {
                write!(f, "solution field written before the 3D grid coordinates")
            }
            Self::FieldLengthMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "field '{name}' has {actual} elements, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for ProjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ProjectError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for ProjectError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
