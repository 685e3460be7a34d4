//! The narrow host-boundary traits.

use silt_core::{Array3, Entity};
use silt_grid::{Grid2d, Grid3d};

use crate::error::ProjectError;

/// Read-side host capabilities: the 2D grid and named parameters.
///
/// Implemented by [`ProjectFile`](crate::ProjectFile) for real runs and by
/// the in-memory recording project in `silt-test-utils` for tests.
pub trait ProjectReader {
    /// Node dimensions `(ni, nj)` of the stored 2D grid.
    fn grid2d_size(&mut self) -> Result<(usize, usize), ProjectError>;

    /// The stored 2D grid coordinates.
    fn read_grid2d(&mut self) -> Result<Grid2d, ProjectError>;

    /// A named integer parameter.
    fn read_integer(&mut self, name: &str) -> Result<i64, ProjectError>;

    /// A named real parameter.
    fn read_real(&mut self, name: &str) -> Result<f64, ProjectError>;
}

/// Write-side host capabilities: everything emitted into the solution.
///
/// Methods take proper multi-dimensional arrays; the implementation owns
/// the flattening to the host's wire order. Calls arrive in a fixed
/// sequence per run (clear, 3D grid, then per step: begin, fields,
/// particle group, end) and any failure is fatal to the run.
pub trait SolutionWriter {
    /// Delete all previously stored solution data.
    fn clear_solution(&mut self) -> Result<(), ProjectError>;

    /// Store the 3D grid coordinates. Called once, before any step.
    fn write_grid3d(&mut self, grid: &Grid3d) -> Result<(), ProjectError>;

    /// Open a new solution step tagged with `time`.
    fn begin_step(&mut self, time: f64) -> Result<(), ProjectError>;

    /// Close the currently open solution step.
    fn end_step(&mut self) -> Result<(), ProjectError>;

    /// Store a named real field over one entity family.
    fn write_real_field(
        &mut self,
        family: Entity,
        name: &str,
        values: &Array3<f64>,
    ) -> Result<(), ProjectError>;

    /// Store a named integer field over one entity family.
    fn write_integer_field(
        &mut self,
        family: Entity,
        name: &str,
        values: &Array3<i32>,
    ) -> Result<(), ProjectError>;

    /// Open a named particle group within the current step.
    fn begin_particle_group(&mut self, name: &str) -> Result<(), ProjectError>;

    /// Store the 3D position of the current particle group.
    fn write_particle_position(&mut self, x: f64, y: f64, z: f64) -> Result<(), ProjectError>;

    /// Store a named real channel of the current particle group.
    fn write_particle_real(&mut self, name: &str, value: f64) -> Result<(), ProjectError>;

    /// Close the currently open particle group.
    fn end_particle_group(&mut self) -> Result<(), ProjectError>;
}
