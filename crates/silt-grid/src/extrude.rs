//! Vertical extrusion of a 2D grid into layers.

use silt_core::{Array3, GridShape};

use crate::grid2d::Grid2d;
use crate::grid3d::Grid3d;

/// Extrude a 2D grid into `divisions + 1` layers from z = 0 to `height`.
///
/// x,y are broadcast unchanged across the new axis; z is evenly spaced and
/// depends only on k. With `divisions == 0` the result is a single layer
/// at z = 0 regardless of `height`.
///
/// # Examples
///
/// ```
/// use silt_grid::{extrude, Grid2d};
///
/// let grid = Grid2d::from_flat(2, 2, vec![0.0, 1.0, 0.0, 1.0], vec![0.0, 0.0, 1.0, 1.0]).unwrap();
/// let grid3d = extrude(&grid, 2, 6.0);
/// assert_eq!(grid3d.shape().nk, 3);
/// assert_eq!(grid3d.position(1, 0, 1), [1.0, 0.0, 3.0]);
/// ```
pub fn extrude(grid: &Grid2d, divisions: usize, height: f64) -> Grid3d {
    let shape = GridShape::new(grid.ni(), grid.nj(), divisions + 1);
    let dims = (shape.ni, shape.nj, shape.nk);

    let x = Array3::from_fn(dims, |i, j, _k| grid.x(i, j));
    let y = Array3::from_fn(dims, |i, j, _k| grid.y(i, j));
    let z = Array3::from_fn(dims, |_i, _j, k| layer_z(k, divisions, height));

    Grid3d::new(shape, x, y, z)
}

/// z sample for layer `k` of `divisions + 1` evenly spaced layers.
///
/// The endpoints are exact: `k == 0` yields 0.0 and `k == divisions`
/// yields `height` with no rounding residue.
fn layer_z(k: usize, divisions: usize, height: f64) -> f64 {
    if divisions == 0 {
        0.0
    } else {
        height * (k as f64 / divisions as f64)
    }
}
