//! In-memory host double that records every solution write.

use silt_core::{Array3, Entity};
use silt_grid::{Grid2d, Grid3d};
use silt_project::{ParamTable, ParamValue, ProjectError, ProjectReader, SolutionWriter};

/// One recorded host call, in call order.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    ClearSolution,
    Grid3d(Grid3d),
    StepBegin { time: f64 },
    StepEnd,
    RealField {
        family: Entity,
        name: String,
        values: Vec<f64>,
    },
    IntegerField {
        family: Entity,
        name: String,
        values: Vec<i32>,
    },
    ParticleBegin { name: String },
    ParticlePosition { x: f64, y: f64, z: f64 },
    ParticleReal { name: String, value: f64 },
    ParticleEnd,
}

/// Mock implementation of [`ProjectReader`] and [`SolutionWriter`].
///
/// Serves a preconfigured grid and parameter table on the read side and
/// appends an [`Event`] per call on the write side, so tests can assert
/// on exact emission order without touching the filesystem.
pub struct RecordingProject {
    params: ParamTable,
    grid: Grid2d,
    events: Vec<Event>,
}

impl RecordingProject {
    /// Create a mock project serving `grid` and `params`.
    pub fn new(grid: Grid2d, params: ParamTable) -> Self {
        Self {
            params,
            grid,
            events: Vec::new(),
        }
    }

    /// Every recorded host call, in call order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Recorded events matching a predicate.
    pub fn events_where(&self, pred: impl Fn(&Event) -> bool) -> Vec<&Event> {
        self.events.iter().filter(|e| pred(e)).collect()
    }

    /// Times of every `StepBegin` event, in emission order.
    pub fn step_times(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::StepBegin { time } => Some(*time),
                _ => None,
            })
            .collect()
    }

    /// Particle positions, one per emitted step, in emission order.
    pub fn particle_positions(&self) -> Vec<(f64, f64, f64)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::ParticlePosition { x, y, z } => Some((*x, *y, *z)),
                _ => None,
            })
            .collect()
    }
}

impl ProjectReader for RecordingProject {
    fn grid2d_size(&mut self) -> Result<(usize, usize), ProjectError> {
        Ok((self.grid.ni(), self.grid.nj()))
    }

    fn read_grid2d(&mut self) -> Result<Grid2d, ProjectError> {
        Ok(self.grid.clone())
    }

    fn read_integer(&mut self, name: &str) -> Result<i64, ProjectError> {
        match self.params.get(name) {
            Some(ParamValue::Integer(v)) => Ok(*v),
            Some(ParamValue::Real(_)) => Err(ProjectError::ParameterType {
                name: name.to_string(),
                expected: "integer",
            }),
            None => Err(ProjectError::UnknownParameter {
                name: name.to_string(),
            }),
        }
    }

    fn read_real(&mut self, name: &str) -> Result<f64, ProjectError> {
        match self.params.get(name) {
            Some(ParamValue::Real(v)) => Ok(*v),
            Some(ParamValue::Integer(_)) => Err(ProjectError::ParameterType {
                name: name.to_string(),
                expected: "real",
            }),
            None => Err(ProjectError::UnknownParameter {
                name: name.to_string(),
            }),
        }
    }
}

impl SolutionWriter for RecordingProject {
    fn clear_solution(&mut self) -> Result<(), ProjectError> {
        self.events.push(Event::ClearSolution);
        Ok(())
    }

    fn write_grid3d(&mut self, grid: &Grid3d) -> Result<(), ProjectError> {
        self.events.push(Event::Grid3d(grid.clone()));
        Ok(())
    }

    fn begin_step(&mut self, time: f64) -> Result<(), ProjectError> {
        self.events.push(Event::StepBegin { time });
        Ok(())
    }

    fn end_step(&mut self) -> Result<(), ProjectError> {
        self.events.push(Event::StepEnd);
        Ok(())
    }

    fn write_real_field(
        &mut self,
        family: Entity,
        name: &str,
        values: &Array3<f64>,
    ) -> Result<(), ProjectError> {
        self.events.push(Event::RealField {
            family,
            name: name.to_string(),
            values: values.as_slice().to_vec(),
        });
        Ok(())
    }

    fn write_integer_field(
        &mut self,
        family: Entity,
        name: &str,
        values: &Array3<i32>,
    ) -> Result<(), ProjectError> {
        self.events.push(Event::IntegerField {
            family,
            name: name.to_string(),
            values: values.as_slice().to_vec(),
        });
        Ok(())
    }

    fn begin_particle_group(&mut self, name: &str) -> Result<(), ProjectError> {
        self.events.push(Event::ParticleBegin {
            name: name.to_string(),
        });
        Ok(())
    }

    fn write_particle_position(&mut self, x: f64, y: f64, z: f64) -> Result<(), ProjectError> {
        self.events.push(Event::ParticlePosition { x, y, z });
        Ok(())
    }

    fn write_particle_real(&mut self, name: &str, value: f64) -> Result<(), ProjectError> {
        self.events.push(Event::ParticleReal {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    fn end_particle_group(&mut self) -> Result<(), ProjectError> {
        self.events.push(Event::ParticleEnd);
        Ok(())
    }
}
