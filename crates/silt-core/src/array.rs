//! Dense 3D array storage with the host's flattening order.

use std::ops::Index;

/// A dense `(ni, nj, nk)` array stored flat with the first axis varying
/// fastest.
///
/// This is the order the host expects for every flat coordinate or field
/// write, so [`as_slice`](Array3::as_slice) is already in wire order and
/// no caller performs its own offset arithmetic.
///
/// # Examples
///
/// ```
/// use silt_core::Array3;
///
/// let a = Array3::from_fn((3, 2, 1), |i, j, _k| i + 10 * j);
/// assert_eq!(a[(2, 0, 0)], 2);
/// assert_eq!(a[(0, 1, 0)], 10);
/// // i varies fastest in the flat layout.
/// assert_eq!(a.as_slice(), &[0, 1, 2, 10, 11, 12]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Array3<T> {
    ni: usize,
    nj: usize,
    nk: usize,
    data: Vec<T>,
}

impl<T> Array3<T> {
    /// Build an array by evaluating `f(i, j, k)` at every position,
    /// visiting positions in flat order (i fastest, then j, then k).
    pub fn from_fn(dims: (usize, usize, usize), mut f: impl FnMut(usize, usize, usize) -> T) -> Self {
        let (ni, nj, nk) = dims;
        let mut data = Vec::with_capacity(ni * nj * nk);
        for k in 0..nk {
            for j in 0..nj {
                for i in 0..ni {
                    data.push(f(i, j, k));
                }
            }
        }
        Self { ni, nj, nk, data }
    }

    /// Dimensions as `(ni, nj, nk)`.
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.ni, self.nj, self.nk)
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array has zero elements (any dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat offset of `(i, j, k)`, first axis fastest.
    fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.ni && j < self.nj && k < self.nk);
        i + self.ni * (j + self.nj * k)
    }

    /// Element at `(i, j, k)`, or `None` if out of bounds.
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<&T> {
        if i < self.ni && j < self.nj && k < self.nk {
            self.data.get(self.offset(i, j, k))
        } else {
            None
        }
    }

    /// The flat backing slice, in the host's wire order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone> Array3<T> {
    /// An array with every element set to `value`.
    pub fn fill(dims: (usize, usize, usize), value: T) -> Self {
        let (ni, nj, nk) = dims;
        Self {
            ni,
            nj,
            nk,
            data: vec![value; ni * nj * nk],
        }
    }
}

impl<T> Index<(usize, usize, usize)> for Array3<T> {
    type Output = T;

    fn index(&self, (i, j, k): (usize, usize, usize)) -> &T {
        &self.data[self.offset(i, j, k)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_fn_records_own_indices() {
        let a = Array3::from_fn((2, 3, 4), |i, j, k| (i, j, k));
        for k in 0..4 {
            for j in 0..3 {
                for i in 0..2 {
                    assert_eq!(a[(i, j, k)], (i, j, k));
                }
            }
        }
    }

    #[test]
    fn get_rejects_out_of_bounds() {
        let a = Array3::fill((2, 2, 2), 0u8);
        assert!(a.get(1, 1, 1).is_some());
        assert!(a.get(2, 0, 0).is_none());
        assert!(a.get(0, 2, 0).is_none());
        assert!(a.get(0, 0, 2).is_none());
    }

    #[test]
    fn zero_dimension_is_empty() {
        let a = Array3::from_fn((0, 5, 5), |_, _, _| 1.0f64);
        assert!(a.is_empty());
        assert_eq!(a.as_slice().len(), 0);
    }

    proptest! {
        #[test]
        fn flat_order_is_first_axis_fastest(
            ni in 1usize..8,
            nj in 1usize..8,
            nk in 1usize..8,
        ) {
            let a = Array3::from_fn((ni, nj, nk), |i, j, k| i + ni * (j + nj * k));
            for (flat, v) in a.as_slice().iter().enumerate() {
                prop_assert_eq!(flat, *v);
            }
        }
    }
}
