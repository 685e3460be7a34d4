//! Streaming reader for the solution section.
//!
//! [`SolutionReader`] decodes a project file back into a stream of
//! [`SolutionRecord`]s, for verification tooling and tests. The record
//! stream is EOF-delimited: `next_record()` yields `None` cleanly when
//! the medium ends on a record boundary and an error if it ends inside
//! a record.

use std::io::Read;

use silt_core::{Entity, GridShape};
use silt_grid::Grid2d;

use crate::codec::{
    entity_from_tag, read_f64_le, read_f64_slice, read_i32_slice, read_str, read_u32_le, read_u8,
    REC_GRID3D, REC_INTEGER_FIELD, REC_PARTICLE_BEGIN, REC_PARTICLE_END, REC_PARTICLE_POSITION,
    REC_PARTICLE_REAL, REC_REAL_FIELD, REC_STEP_BEGIN, REC_STEP_END,
};
use crate::error::ProjectError;
use crate::file::{read_grid2d_section, read_header_prefix, read_param_table};
use crate::params::ParamTable;

/// One decoded solution record.
#[derive(Clone, Debug, PartialEq)]
pub enum SolutionRecord {
    /// 3D grid coordinates, flat in wire order (i fastest).
    Grid3d {
        /// Node dimensions.
        shape: GridShape,
        /// Flat x coordinates.
        x: Vec<f64>,
        /// Flat y coordinates.
        y: Vec<f64>,
        /// Flat z coordinates.
        z: Vec<f64>,
    },
    /// A solution step opened at `time`.
    StepBegin {
        /// Time value the step is tagged with.
        time: f64,
    },
    /// The current solution step closed.
    StepEnd,
    /// A named real field over one entity family.
    RealField {
        /// Entity family the field is attached to.
        family: Entity,
        /// Field name.
        name: String,
        /// Flat values in wire order.
        values: Vec<f64>,
    },
    /// A named integer field over one entity family.
    IntegerField {
        /// Entity family the field is attached to.
        family: Entity,
        /// Field name.
        name: String,
        /// Flat values in wire order.
        values: Vec<i32>,
    },
    /// A particle group opened.
    ParticleBegin {
        /// Group name.
        name: String,
    },
    /// Particle group 3D position.
    ParticlePosition {
        /// x coordinate.
        x: f64,
        /// y coordinate.
        y: f64,
        /// z coordinate.
        z: f64,
    },
    /// A named real particle channel.
    ParticleReal {
        /// Channel name.
        name: String,
        /// Channel value.
        value: f64,
    },
    /// The current particle group closed.
    ParticleEnd,
}

/// Reads a project file front to back, decoding solution records.
pub struct SolutionReader<R: Read> {
    reader: R,
    params: ParamTable,
    grid: Grid2d,
}

impl<R: Read> SolutionReader<R> {
    /// Parse the header and position the stream at the first record.
    pub fn open(mut reader: R) -> Result<Self, ProjectError> {
        read_header_prefix(&mut reader)?;
        let params = read_param_table(&mut reader)?;
        let grid = read_grid2d_section(&mut reader)?;
        Ok(Self {
            reader,
            params,
            grid,
        })
    }

    /// The parameter table from the header.
    pub fn params(&self) -> &ParamTable {
        &self.params
    }

    /// The 2D grid from the header.
    pub fn grid2d(&self) -> &Grid2d {
        &self.grid
    }

    /// Decode the next record, or `None` at a clean end of stream.
    pub fn next_record(&mut self) -> Result<Option<SolutionRecord>, ProjectError> {
        let tag = match read_tag(&mut self.reader)? {
            Some(tag) => tag,
            None => return Ok(None),
        };

        let record = match tag {
            REC_GRID3D => {
                let ni = read_u32_le(&mut self.reader)? as usize;
                let nj = read_u32_le(&mut self.reader)? as usize;
                let nk = read_u32_le(&mut self.reader)? as usize;
                SolutionRecord::Grid3d {
                    shape: GridShape::new(ni, nj, nk),
                    x: read_f64_slice(&mut self.reader)?,
                    y: read_f64_slice(&mut self.reader)?,
                    z: read_f64_slice(&mut self.reader)?,
                }
            }
            REC_STEP_BEGIN => SolutionRecord::StepBegin {
                time: read_f64_le(&mut self.reader)?,
            },
            REC_STEP_END => SolutionRecord::StepEnd,
            REC_REAL_FIELD => SolutionRecord::RealField {
                family: entity_from_tag(read_u8(&mut self.reader)?)?,
                name: read_str(&mut self.reader)?,
                values: read_f64_slice(&mut self.reader)?,
            },
            REC_INTEGER_FIELD => SolutionRecord::IntegerField {
                family: entity_from_tag(read_u8(&mut self.reader)?)?,
                name: read_str(&mut self.reader)?,
                values: read_i32_slice(&mut self.reader)?,
            },
            REC_PARTICLE_BEGIN => SolutionRecord::ParticleBegin {
                name: read_str(&mut self.reader)?,
            },
            REC_PARTICLE_POSITION => SolutionRecord::ParticlePosition {
                x: read_f64_le(&mut self.reader)?,
                y: read_f64_le(&mut self.reader)?,
                z: read_f64_le(&mut self.reader)?,
            },
            REC_PARTICLE_REAL => SolutionRecord::ParticleReal {
                name: read_str(&mut self.reader)?,
                value: read_f64_le(&mut self.reader)?,
            },
            REC_PARTICLE_END => SolutionRecord::ParticleEnd,
            tag => return Err(ProjectError::UnknownRecordTag { tag }),
        };
        Ok(Some(record))
    }

    /// Decode every remaining record into a vector.
    pub fn read_all(&mut self) -> Result<Vec<SolutionRecord>, ProjectError> {
        let mut records = Vec::new();
        while let Some(record) = self.next_record()? {
            records.push(record);
        }
        Ok(records)
    }
}

/// Read a record tag, distinguishing clean EOF from a mid-record cut.
fn read_tag(r: &mut dyn Read) -> Result<Option<u8>, ProjectError> {
    let mut buf = [0u8; 1];
    loop {
        match r.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}
