//! Error types for the run loop.

use std::fmt;

use silt_project::ProjectError;

/// Errors from preparing or emitting a debug run.
#[derive(Debug)]
pub enum RunError {
    /// A host project call failed. Fatal: the run stops where it was.
    Project(ProjectError),
    /// A scalar parameter that must be non-negative was negative.
    NegativeParameter {
        /// Parameter name as stored in the project file.
        name: &'static str,
        /// The offending value.
        value: i64,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project(e) => write!(f, "project file: {e}"),
            Self::NegativeParameter { name, value } => {
                write!(f, "parameter '{name}' must be non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Project(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ProjectError> for RunError {
    fn from(e: ProjectError) -> Self {
        Self::Project(e)
    }
}
