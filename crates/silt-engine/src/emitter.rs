//! The time-step emission loop.

use silt_core::{Entity, GridShape};
use silt_fields::{Axis, IndexFields, VectorField};
use silt_grid::{extrude, Grid3d};
use silt_project::{ProjectReader, SolutionWriter};

use crate::config::RunParams;
use crate::error::RunError;
use crate::walker::Particle;

/// Name of the emitted particle group.
pub const PARTICLE_GROUP: &str = "particle";

/// Outcome of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Node dimensions of the extruded grid.
    pub shape: GridShape,
    /// Number of solution steps emitted (`time_end + 1`).
    pub steps_emitted: u64,
}

/// A prepared debug run: extruded grid plus every synthetic field,
/// computed once and immutable for the rest of the run.
///
/// [`prepare`](DebugRun::prepare) performs all host reads and the single
/// 3D grid write; [`emit`](DebugRun::emit) performs the per-tick writes.
/// Only the particle position changes between ticks, so the loop is
/// strictly sequential.
#[derive(Debug)]
pub struct DebugRun {
    shape: GridShape,
    grid3d: Grid3d,
    vector: VectorField,
    index_fields: Vec<IndexFields>,
    time_end: u64,
}

impl DebugRun {
    /// Clear prior results, read parameters and the 2D grid, extrude, and
    /// write the 3D grid coordinates.
    pub fn prepare<P>(project: &mut P) -> Result<Self, RunError>
    where
        P: ProjectReader + SolutionWriter,
    {
        project.clear_solution()?;

        let params = RunParams::read_from(project)?;
        let grid2d = project.read_grid2d()?;
        let grid3d = extrude(&grid2d, params.z_division, params.z_height);
        let shape = grid3d.shape();

        project.write_grid3d(&grid3d)?;

        Ok(Self {
            shape,
            grid3d,
            vector: VectorField::fractional(shape),
            index_fields: IndexFields::all_families(shape),
            time_end: params.time_end,
        })
    }

    /// Node dimensions of the extruded grid.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Final tick, inclusive.
    pub fn time_end(&self) -> u64 {
        self.time_end
    }

    /// Emit one solution step per tick, 0 through `time_end` inclusive.
    ///
    /// `progress` is called once per emitted step with `(tick, time_end)`.
    /// Any writer failure aborts the loop immediately, leaving whatever
    /// was already written in place.
    pub fn emit<W>(
        &self,
        writer: &mut W,
        mut progress: impl FnMut(u64, u64),
    ) -> Result<RunSummary, RunError>
    where
        W: SolutionWriter,
    {
        let mut particle = Particle::ORIGIN;

        for tick in 0..=self.time_end {
            if tick > 0 {
                particle = particle.advanced(self.shape);
            }

            writer.begin_step(tick as f64)?;
            self.emit_fields(writer)?;
            self.emit_particle(writer, particle)?;
            writer.end_step()?;

            progress(tick, self.time_end);
        }

        Ok(RunSummary {
            shape: self.shape,
            steps_emitted: self.time_end + 1,
        })
    }

    /// The static per-step field block: vector components, then the five
    /// identity index families.
    fn emit_fields<W: SolutionWriter>(&self, writer: &mut W) -> Result<(), RunError> {
        writer.write_real_field(Entity::Node, "vectorX", self.vector.x())?;
        writer.write_real_field(Entity::Node, "vectorY", self.vector.y())?;
        writer.write_real_field(Entity::Node, "vectorZ", self.vector.z())?;

        for fields in &self.index_fields {
            for axis in Axis::ALL {
                writer.write_integer_field(
                    fields.family(),
                    &fields.name(axis),
                    fields.component(axis),
                )?;
            }
        }
        Ok(())
    }

    /// The particle record: 3D position plus 12 scalar channels encoding
    /// the vector at the particle as a diagonal 3x3 matrix (the vector
    /// itself, then one row per component with the off-diagonal entries
    /// zero) for matrix-glyph visualization.
    fn emit_particle<W: SolutionWriter>(
        &self,
        writer: &mut W,
        particle: Particle,
    ) -> Result<(), RunError> {
        let [px, py, pz] = self.grid3d.position(particle.i, particle.j, particle.k);
        let [vx, vy, vz] = self.vector.sample(particle.i, particle.j, particle.k);

        writer.begin_particle_group(PARTICLE_GROUP)?;
        writer.write_particle_position(px, py, pz)?;

        let channels = [
            ("particle_vectorX", vx),
            ("particle_vectorY", vy),
            ("particle_vectorZ", vz),
            ("particle_vector_xX", vx),
            ("particle_vector_xY", 0.0),
            ("particle_vector_xZ", 0.0),
            ("particle_vector_yX", 0.0),
            ("particle_vector_yY", vy),
            ("particle_vector_yZ", 0.0),
            ("particle_vector_zX", 0.0),
            ("particle_vector_zY", 0.0),
            ("particle_vector_zZ", vz),
        ];
        for (name, value) in channels {
            writer.write_particle_real(name, value)?;
        }

        writer.end_particle_group()?;
        Ok(())
    }
}

/// Prepare and emit in one call: the whole run against one project.
pub fn run<P>(project: &mut P, progress: impl FnMut(u64, u64)) -> Result<RunSummary, RunError>
where
    P: ProjectReader + SolutionWriter,
{
    let prepared = DebugRun::prepare(project)?;
    prepared.emit(project, progress)
}
