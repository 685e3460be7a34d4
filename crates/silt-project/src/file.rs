//! The concrete binary project file.

use std::fs::{File, OpenOptions};
use std::io::{Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;

use silt_core::{Array3, Entity, GridShape};
use silt_grid::{Grid2d, Grid3d};

use crate::codec::{
    entity_tag, read_f64_le, read_f64_slice, read_i64_le, read_str, read_u32_le, read_u8,
    write_f64_le, write_f64_slice, write_i32_slice, write_i64_le, write_str, write_u32_le,
    write_u8, REC_GRID3D, REC_INTEGER_FIELD, REC_PARTICLE_BEGIN, REC_PARTICLE_END,
    REC_PARTICLE_POSITION, REC_PARTICLE_REAL, REC_REAL_FIELD, REC_STEP_BEGIN, REC_STEP_END,
};
use crate::error::ProjectError;
use crate::params::{ParamTable, ParamValue};
use crate::traits::{ProjectReader, SolutionWriter};
use crate::{FORMAT_VERSION, MAGIC};

// ── ProjectIo ───────────────────────────────────────────────────

/// Storage medium for a project file.
///
/// `Seek` cannot truncate, so this adds the one missing capability needed
/// by [`SolutionWriter::clear_solution`]. Implemented for [`File`] and for
/// `Cursor<Vec<u8>>` so tests run entirely in memory.
pub trait ProjectIo: Read + Write + Seek {
    /// Shrink the medium to `len` bytes.
    fn truncate(&mut self, len: u64) -> std::io::Result<()>;
}

impl ProjectIo for File {
    fn truncate(&mut self, len: u64) -> std::io::Result<()> {
        self.set_len(len)
    }
}

impl ProjectIo for Cursor<Vec<u8>> {
    fn truncate(&mut self, len: u64) -> std::io::Result<()> {
        self.get_mut().truncate(len as usize);
        Ok(())
    }
}

// ── ProjectFile ─────────────────────────────────────────────────

/// A Silt project file opened in read-modify mode.
///
/// The header (parameter table + 2D grid) is parsed eagerly on open and
/// served from memory; solution records are appended to the medium as the
/// [`SolutionWriter`] methods are called. The file layout is:
///
/// ```text
/// magic "SILT" | version | parameter table | 2D grid | solution records...
/// ```
///
/// [`clear_solution`](SolutionWriter::clear_solution) truncates the medium
/// at the end of the header, discarding every previously stored record.
#[derive(Debug)]
pub struct ProjectFile<F: ProjectIo> {
    io: F,
    params: ParamTable,
    grid: Grid2d,
    solution_offset: u64,
    shape: Option<GridShape>,
}

impl ProjectFile<File> {
    /// Open an existing project file on disk in read-modify mode.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Self::open(file)
    }

    /// Author a new project file on disk from parameters and a 2D grid.
    pub fn create_path(
        path: impl AsRef<Path>,
        params: &ParamTable,
        grid: &Grid2d,
    ) -> Result<Self, ProjectError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Self::create(file, params, grid)
    }
}

impl<F: ProjectIo> ProjectFile<F> {
    /// Open an existing project from any [`ProjectIo`] medium.
    ///
    /// Parses the header and positions the medium at its end, so writes
    /// append after any existing solution records until
    /// [`clear_solution`](SolutionWriter::clear_solution) is called.
    pub fn open(mut io: F) -> Result<Self, ProjectError> {
        io.seek(SeekFrom::Start(0))?;
        read_header_prefix(&mut io)?;
        let params = read_param_table(&mut io)?;
        let grid = read_grid2d_section(&mut io)?;
        let solution_offset = io.stream_position()?;
        io.seek(SeekFrom::End(0))?;

        Ok(Self {
            io,
            params,
            grid,
            solution_offset,
            shape: None,
        })
    }

    /// Author a new project onto an empty [`ProjectIo`] medium.
    pub fn create(mut io: F, params: &ParamTable, grid: &Grid2d) -> Result<Self, ProjectError> {
        io.seek(SeekFrom::Start(0))?;
        io.write_all(&MAGIC)?;
        write_u8(&mut io, FORMAT_VERSION)?;

        write_u32_le(&mut io, params.len() as u32)?;
        for (name, value) in params {
            write_str(&mut io, name)?;
            match value {
                ParamValue::Integer(v) => {
                    write_u8(&mut io, 0)?;
                    write_i64_le(&mut io, *v)?;
                }
                ParamValue::Real(v) => {
                    write_u8(&mut io, 1)?;
                    write_f64_le(&mut io, *v)?;
                }
            }
        }

        write_u32_le(&mut io, grid.ni() as u32)?;
        write_u32_le(&mut io, grid.nj() as u32)?;
        write_f64_slice(&mut io, grid.x_flat())?;
        write_f64_slice(&mut io, grid.y_flat())?;

        let solution_offset = io.stream_position()?;
        io.flush()?;

        Ok(Self {
            io,
            params: params.clone(),
            grid: grid.clone(),
            solution_offset,
            shape: None,
        })
    }

    /// Flush and return the underlying medium.
    pub fn into_inner(mut self) -> F {
        let _ = self.io.flush();
        self.io
    }

    fn check_field(
        &self,
        family: Entity,
        name: &str,
        actual: usize,
    ) -> Result<(), ProjectError> {
        let shape = self.shape.ok_or(ProjectError::GridNotWritten)?;
        let expected = shape.count(family);
        if actual != expected {
            return Err(ProjectError::FieldLengthMismatch {
                name: name.to_string(),
                expected,
                actual,
            });
        }
        Ok(())
    }
}

/// Check the magic bytes and format version at the start of the header.
pub(crate) fn read_header_prefix(io: &mut dyn Read) -> Result<(), ProjectError> {
    let mut magic = [0u8; 4];
    io.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(ProjectError::InvalidMagic);
    }
    let version = read_u8(io)?;
    if version != FORMAT_VERSION {
        return Err(ProjectError::UnsupportedVersion { found: version });
    }
    Ok(())
}

pub(crate) fn read_param_table(io: &mut dyn Read) -> Result<ParamTable, ProjectError> {
    let count = read_u32_le(io)?;
    let mut params = ParamTable::new();
    for _ in 0..count {
        let name = read_str(io)?;
        let tag = read_u8(io)?;
        let value = match tag {
            0 => ParamValue::Integer(read_i64_le(io)?),
            1 => ParamValue::Real(read_f64_le(io)?),
            _ => {
                return Err(ProjectError::MalformedRecord {
                    detail: format!("unknown parameter tag {tag} for '{name}'"),
                })
            }
        };
        params.insert(name, value);
    }
    Ok(params)
}

pub(crate) fn read_grid2d_section(io: &mut dyn Read) -> Result<Grid2d, ProjectError> {
    let ni = read_u32_le(io)? as usize;
    let nj = read_u32_le(io)? as usize;
    let x = read_f64_slice(io)?;
    let y = read_f64_slice(io)?;
    Ok(Grid2d::from_flat(ni, nj, x, y)?)
}

impl<F: ProjectIo> ProjectReader for ProjectFile<F> {
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

impl<F: ProjectIo> SolutionWriter for ProjectFile<F> {
    fn clear_solution(&mut self) -> Result<(), ProjectError> {
        self.io.truncate(self.solution_offset)?;
        self.io.seek(SeekFrom::Start(self.solution_offset))?;
        self.shape = None;
        Ok(())
    }

    fn write_grid3d(&mut self, grid: &Grid3d) -> Result<(), ProjectError> {
        let shape = grid.shape();
        write_u8(&mut self.io, REC_GRID3D)?;
        write_u32_le(&mut self.io, shape.ni as u32)?;
        write_u32_le(&mut self.io, shape.nj as u32)?;
        write_u32_le(&mut self.io, shape.nk as u32)?;
        write_f64_slice(&mut self.io, grid.x().as_slice())?;
        write_f64_slice(&mut self.io, grid.y().as_slice())?;
        write_f64_slice(&mut self.io, grid.z().as_slice())?;
        self.shape = Some(shape);
        Ok(())
    }

    fn begin_step(&mut self, time: f64) -> Result<(), ProjectError> {
        write_u8(&mut self.io, REC_STEP_BEGIN)?;
        write_f64_le(&mut self.io, time)?;
        Ok(())
    }

    fn end_step(&mut self) -> Result<(), ProjectError> {
        write_u8(&mut self.io, REC_STEP_END)?;
        self.io.flush()?;
        Ok(())
    }

    fn write_real_field(
        &mut self,
        family: Entity,
        name: &str,
        values: &Array3<f64>,
    ) -> Result<(), ProjectError> {
        self.check_field(family, name, values.len())?;
        write_u8(&mut self.io, REC_REAL_FIELD)?;
        write_u8(&mut self.io, entity_tag(family))?;
        write_str(&mut self.io, name)?;
        write_f64_slice(&mut self.io, values.as_slice())?;
        Ok(())
    }

    fn write_integer_field(
        &mut self,
        family: Entity,
        name: &str,
        values: &Array3<i32>,
    ) -> Result<(), ProjectError> {
        self.check_field(family, name, values.len())?;
        write_u8(&mut self.io, REC_INTEGER_FIELD)?;
        write_u8(&mut self.io, entity_tag(family))?;
        write_str(&mut self.io, name)?;
        write_i32_slice(&mut self.io, values.as_slice())?;
        Ok(())
    }

    fn begin_particle_group(&mut self, name: &str) -> Result<(), ProjectError> {
        write_u8(&mut self.io, REC_PARTICLE_BEGIN)?;
        write_str(&mut self.io, name)?;
        Ok(())
    }

    fn write_particle_position(&mut self, x: f64, y: f64, z: f64) -> Result<(), ProjectError> {
        write_u8(&mut self.io, REC_PARTICLE_POSITION)?;
        write_f64_le(&mut self.io, x)?;
        write_f64_le(&mut self.io, y)?;
        write_f64_le(&mut self.io, z)?;
        Ok(())
    }

    fn write_particle_real(&mut self, name: &str, value: f64) -> Result<(), ProjectError> {
        write_u8(&mut self.io, REC_PARTICLE_REAL)?;
        write_str(&mut self.io, name)?;
        write_f64_le(&mut self.io, value)?;
        Ok(())
    }

    fn end_particle_group(&mut self) -> Result<(), ProjectError> {
        write_u8(&mut self.io, REC_PARTICLE_END)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid2d {
        Grid2d::from_flat(
            3,
            2,
            vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0],
            vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
        )
        .unwrap()
    }

    fn sample_params() -> ParamTable {
        let mut params = ParamTable::new();
        params.insert("time_end".into(), ParamValue::Integer(5));
        params.insert("z_division".into(), ParamValue::Integer(2));
        params.insert("z_height".into(), ParamValue::Real(1.5));
        params
    }

    fn in_memory_project() -> ProjectFile<Cursor<Vec<u8>>> {
        let file =
            ProjectFile::create(Cursor::new(Vec::new()), &sample_params(), &sample_grid()).unwrap();
        ProjectFile::open(file.into_inner()).unwrap()
    }

    #[test]
    fn create_then_open_round_trips_header() {
        let mut project = in_memory_project();
        assert_eq!(project.grid2d_size().unwrap(), (3, 2));
        assert_eq!(project.read_grid2d().unwrap(), sample_grid());
        assert_eq!(project.read_integer("time_end").unwrap(), 5);
        assert_eq!(project.read_real("z_height").unwrap(), 1.5);
    }

    #[test]
    fn parameter_lookups_report_name_and_type() {
        let mut project = in_memory_project();
        assert!(matches!(
            project.read_integer("missing").unwrap_err(),
            ProjectError::UnknownParameter { .. }
        ));
        assert!(matches!(
            project.read_real("time_end").unwrap_err(),
            ProjectError::ParameterType {
                expected: "real",
                ..
            }
        ));
        assert!(matches!(
            project.read_integer("z_height").unwrap_err(),
            ProjectError::ParameterType {
                expected: "integer",
                ..
            }
        ));
    }

    #[test]
    fn open_rejects_wrong_magic_and_version() {
        let err = ProjectFile::open(Cursor::new(b"XXXX\x01".to_vec())).unwrap_err();
        assert!(matches!(err, ProjectError::InvalidMagic));

        let mut bytes = MAGIC.to_vec();
        bytes.push(99);
        let err = ProjectFile::open(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, ProjectError::UnsupportedVersion { found: 99 }));
    }

    #[test]
    fn clear_solution_discards_prior_records() {
        let mut project = in_memory_project();
        let header_len = project.solution_offset as usize;

        let grid3d = silt_grid::extrude(&sample_grid(), 1, 1.5);
        project.write_grid3d(&grid3d).unwrap();
        project.begin_step(0.0).unwrap();
        project.end_step().unwrap();
        assert!(project.io.get_ref().len() > header_len);

        project.clear_solution().unwrap();
        assert_eq!(project.io.get_ref().len(), header_len);

        // A fresh grid write starts a new solution section cleanly.
        project.write_grid3d(&grid3d).unwrap();
        let reopened = ProjectFile::open(project.into_inner()).unwrap();
        assert_eq!(reopened.solution_offset as usize, header_len);
    }

    #[test]
    fn field_writes_require_a_grid_and_matching_length() {
        let mut project = in_memory_project();
        let values = Array3::fill((3, 2, 2), 0.0f64);
        let err = project
            .write_real_field(Entity::Node, "vectorX", &values)
            .unwrap_err();
        assert!(matches!(err, ProjectError::GridNotWritten));

        let grid3d = silt_grid::extrude(&sample_grid(), 1, 1.5);
        project.write_grid3d(&grid3d).unwrap();
        project
            .write_real_field(Entity::Node, "vectorX", &values)
            .unwrap();

        let wrong = Array3::fill((3, 2, 1), 0i32);
        let err = project
            .write_integer_field(Entity::Cell, "cell_index_i", &wrong)
            .unwrap_err();
        assert!(matches!(
            err,
            ProjectError::FieldLengthMismatch { expected: 2, actual: 6, .. }
        ));
    }
}
