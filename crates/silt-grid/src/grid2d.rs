//! The planar source grid read from the project file.

use crate::error::GridError;

/// A 2D structured grid: x,y coordinates over `ni` x `nj` nodes.
///
/// Coordinates are stored flat with i varying fastest, exactly as the host
/// serializes them.
///
/// # Examples
///
/// ```
/// use silt_grid::Grid2d;
///
/// // 3x2 grid, unit spacing.
/// let x = vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0];
/// let y = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
/// let grid = Grid2d::from_flat(3, 2, x, y).unwrap();
/// assert_eq!(grid.x(2, 1), 2.0);
/// assert_eq!(grid.y(2, 1), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid2d {
    ni: usize,
    nj: usize,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Grid2d {
    /// Build a grid from flat coordinate arrays in host order (i fastest).
    pub fn from_flat(
        ni: usize,
        nj: usize,
        x: Vec<f64>,
        y: Vec<f64>,
    ) -> Result<Self, GridError> {
        let expected = ni * nj;
        if x.len() != expected {
            return Err(GridError::CoordLengthMismatch {
                axis: "x",
                expected,
                actual: x.len(),
            });
        }
        if y.len() != expected {
            return Err(GridError::CoordLengthMismatch {
                axis: "y",
                expected,
                actual: y.len(),
            });
        }
        Ok(Self { ni, nj, x, y })
    }

    /// Node count along the i axis.
    pub fn ni(&self) -> usize {
        self.ni
    }

    /// Node count along the j axis.
    pub fn nj(&self) -> usize {
        self.nj
    }

    /// x coordinate of node `(i, j)`.
    pub fn x(&self, i: usize, j: usize) -> f64 {
        self.x[i + self.ni * j]
    }

    /// y coordinate of node `(i, j)`.
    pub fn y(&self, i: usize, j: usize) -> f64 {
        self.y[i + self.ni * j]
    }

    /// Flat x coordinates in host order.
    pub fn x_flat(&self) -> &[f64] {
        &self.x
    }

    /// Flat y coordinates in host order.
    pub fn y_flat(&self) -> &[f64] {
        &self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_rejects_short_arrays() {
        let err = Grid2d::from_flat(3, 2, vec![0.0; 5], vec![0.0; 6]).unwrap_err();
        assert_eq!(
            err,
            GridError::CoordLengthMismatch {
                axis: "x",
                expected: 6,
                actual: 5,
            }
        );
        let err = Grid2d::from_flat(3, 2, vec![0.0; 6], vec![0.0; 7]).unwrap_err();
        assert!(matches!(err, GridError::CoordLengthMismatch { axis: "y", .. }));
    }

    #[test]
    fn indexing_is_i_fastest() {
        let x: Vec<f64> = (0..6).map(f64::from).collect();
        let y: Vec<f64> = (0..6).map(|v| f64::from(v) * 10.0).collect();
        let grid = Grid2d::from_flat(3, 2, x, y).unwrap();
        // flat index 4 = (1, 1)
        assert_eq!(grid.x(1, 1), 4.0);
        assert_eq!(grid.y(1, 1), 40.0);
    }
}
