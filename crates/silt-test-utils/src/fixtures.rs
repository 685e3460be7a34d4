//! Grid and project fixtures.

use silt_grid::Grid2d;
use silt_project::{ParamTable, ParamValue};

use crate::recording::RecordingProject;

/// A unit-spaced `ni` x `nj` grid with x = i and y = j.
pub fn unit_grid(ni: usize, nj: usize) -> Grid2d {
    let mut x = Vec::with_capacity(ni * nj);
    let mut y = Vec::with_capacity(ni * nj);
    for j in 0..nj {
        for i in 0..ni {
            x.push(i as f64);
            y.push(j as f64);
        }
    }
    Grid2d::from_flat(ni, nj, x, y).expect("fixture dimensions are consistent")
}

/// A [`RecordingProject`] over a unit grid with the standard parameters.
pub fn recording_project(
    ni: usize,
    nj: usize,
    time_end: i64,
    z_division: i64,
    z_height: f64,
) -> RecordingProject {
    let mut params = ParamTable::new();
    params.insert("time_end".into(), ParamValue::Integer(time_end));
    params.insert("z_division".into(), ParamValue::Integer(z_division));
    params.insert("z_height".into(), ParamValue::Real(z_height));
    RecordingProject::new(unit_grid(ni, nj), params)
}
