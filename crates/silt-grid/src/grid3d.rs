//! The extruded 3D grid.

use silt_core::{Array3, GridShape};

/// A 3D structured grid: x,y,z coordinates over `ni` x `nj` x `nk` nodes.
///
/// Produced by [`extrude`](crate::extrude); the x,y arrays repeat the
/// source 2D grid on every layer and z depends only on k.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid3d {
    shape: GridShape,
    x: Array3<f64>,
    y: Array3<f64>,
    z: Array3<f64>,
}

impl Grid3d {
    pub(crate) fn new(shape: GridShape, x: Array3<f64>, y: Array3<f64>, z: Array3<f64>) -> Self {
        Self { shape, x, y, z }
    }

    /// Node dimensions of the grid.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// The x coordinate array.
    pub fn x(&self) -> &Array3<f64> {
        &self.x
    }

    /// The y coordinate array.
    pub fn y(&self) -> &Array3<f64> {
        &self.y
    }

    /// The z coordinate array.
    pub fn z(&self) -> &Array3<f64> {
        &self.z
    }

    /// Physical position of node `(i, j, k)` as `[x, y, z]`.
    pub fn position(&self, i: usize, j: usize, k: usize) -> [f64; 3] {
        [self.x[(i, j, k)], self.y[(i, j, k)], self.z[(i, j, k)]]
    }
}
