//! The fractional-index vector field.

use silt_core::{Array3, GridShape};

/// A static node vector field whose value at `(i, j, k)` is
/// `(i/ni, j/nj, k/nk)`.
///
/// Each component depends on exactly one axis and is divided by that
/// axis's node count (not count minus one), so the largest index never
/// quite reaches 1.0. The field is computed once per grid and reused for
/// every solution step.
///
/// # Examples
///
/// ```
/// use silt_core::GridShape;
/// use silt_fields::VectorField;
///
/// let field = VectorField::fractional(GridShape::new(4, 3, 2));
/// assert_eq!(field.sample(2, 0, 1), [0.5, 0.0, 0.5]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VectorField {
    x: Array3<f64>,
    y: Array3<f64>,
    z: Array3<f64>,
}

impl VectorField {
    /// Build the fractional-index field over the nodes of `shape`.
    pub fn fractional(shape: GridShape) -> Self {
        let dims = (shape.ni, shape.nj, shape.nk);
        Self {
            x: Array3::from_fn(dims, |i, _, _| i as f64 / shape.ni as f64),
            y: Array3::from_fn(dims, |_, j, _| j as f64 / shape.nj as f64),
            z: Array3::from_fn(dims, |_, _, k| k as f64 / shape.nk as f64),
        }
    }

    /// The x component array.
    pub fn x(&self) -> &Array3<f64> {
        &self.x
    }

    /// The y component array.
    pub fn y(&self) -> &Array3<f64> {
        &self.y
    }

    /// The z component array.
    pub fn z(&self) -> &Array3<f64> {
        &self.z
    }

    /// The field value at node `(i, j, k)` as `[x, y, z]`.
    pub fn sample(&self, i: usize, j: usize, k: usize) -> [f64; 3] {
        [self.x[(i, j, k)], self.y[(i, j, k)], self.z[(i, j, k)]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn values_are_fractional_indices() {
        let field = VectorField::fractional(GridShape::new(4, 2, 5));
        assert_eq!(field.sample(0, 0, 0), [0.0, 0.0, 0.0]);
        assert_eq!(field.sample(3, 1, 4), [0.75, 0.5, 0.8]);
    }

    #[test]
    fn maximum_index_stays_below_one() {
        let shape = GridShape::new(7, 3, 9);
        let field = VectorField::fractional(shape);
        let top = field.sample(shape.ni - 1, shape.nj - 1, shape.nk - 1);
        assert!(top.iter().all(|&c| c < 1.0));
    }

    proptest! {
        #[test]
        fn components_depend_only_on_their_own_axis(
            ni in 1usize..7,
            nj in 1usize..7,
            nk in 1usize..7,
            i in 0usize..7,
            j1 in 0usize..7,
            j2 in 0usize..7,
            k1 in 0usize..7,
            k2 in 0usize..7,
        ) {
            let (i, j1, j2) = (i % ni, j1 % nj, j2 % nj);
            let (k1, k2) = (k1 % nk, k2 % nk);
            let field = VectorField::fractional(GridShape::new(ni, nj, nk));
            // Moving in j or k leaves the x component untouched.
            prop_assert_eq!(field.x()[(i, j1, k1)], field.x()[(i, j2, k2)]);
            prop_assert_eq!(field.y()[(i, j1, k1)], field.y()[(i, j1, k2)]);
            prop_assert_eq!(field.z()[(i, j1, k1)], field.z()[(i, j2, k1)]);
        }
    }
}
