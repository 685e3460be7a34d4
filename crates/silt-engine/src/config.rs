//! Run parameters read from the project file.

use silt_project::ProjectReader;

use crate::error::RunError;

/// Name of the final-tick parameter.
pub const PARAM_TIME_END: &str = "time_end";
/// Name of the vertical division-count parameter.
pub const PARAM_Z_DIVISION: &str = "z_division";
/// Name of the vertical extent parameter.
pub const PARAM_Z_HEIGHT: &str = "z_height";

/// Scalar parameters controlling one debug run.
///
/// `z_division` is the number of vertical divisions; the extruded grid has
/// `z_division + 1` layers. The run emits `time_end + 1` steps (ticks 0
/// through `time_end` inclusive).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunParams {
    /// Final tick, inclusive.
    pub time_end: u64,
    /// Vertical division count.
    pub z_division: usize,
    /// Vertical extent: z of the top layer.
    pub z_height: f64,
}

impl RunParams {
    /// Read the three named parameters from the project.
    pub fn read_from(reader: &mut impl ProjectReader) -> Result<Self, RunError> {
        let time_end = non_negative(PARAM_TIME_END, reader.read_integer(PARAM_TIME_END)?)?;
        let z_division = non_negative(PARAM_Z_DIVISION, reader.read_integer(PARAM_Z_DIVISION)?)?;
        let z_height = reader.read_real(PARAM_Z_HEIGHT)?;
        Ok(Self {
            time_end,
            z_division: z_division as usize,
            z_height,
        })
    }
}

fn non_negative(name: &'static str, value: i64) -> Result<u64, RunError> {
    u64::try_from(value).map_err(|_| RunError::NegativeParameter { name, value })
}
