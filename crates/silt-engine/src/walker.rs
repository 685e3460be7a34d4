//! The perimeter-walking particle.

use silt_core::GridShape;

/// Grid-index position of the walking particle.
///
/// The particle starts at the origin and walks the outer perimeter of the
/// bottom layer clockwise, one edge cell per tick. Each time it comes back
/// to `(i, j) = (0, 0)` it climbs one layer, wrapping to layer 0 after the
/// top, and the lap starts over. The walk is periodic with no terminal
/// state.
///
/// # Examples
///
/// ```
/// use silt_core::GridShape;
/// use silt_engine::Particle;
///
/// let shape = GridShape::new(4, 3, 2);
/// let mut p = Particle::ORIGIN;
/// for _ in 0..10 {
///     p = p.advanced(shape);
/// }
/// // One full lap of the perimeter, then up one layer.
/// assert_eq!(p, Particle { i: 0, j: 0, k: 1 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Particle {
    /// Index along the i axis.
    pub i: usize,
    /// Index along the j axis.
    pub j: usize,
    /// Layer index.
    pub k: usize,
}

impl Particle {
    /// The starting position, `(0, 0, 0)`.
    pub const ORIGIN: Particle = Particle { i: 0, j: 0, k: 0 };

    /// One tick of the perimeter walk.
    ///
    /// The four edge rules are tried in strict priority order; on
    /// degenerate single-row or single-column grids whichever rule fires
    /// first wins, which makes the particle shuttle along the only edge
    /// rather than stand still. If no rule applies the position is kept.
    pub fn advanced(self, shape: GridShape) -> Particle {
        let Particle { mut i, mut j, mut k } = self;

        if j == 0 && i < shape.ni - 1 {
            i += 1; // along the bottom edge, rightward
        } else if i == shape.ni - 1 && j < shape.nj - 1 {
            j += 1; // up the right edge
        } else if j == shape.nj - 1 && i > 0 {
            i -= 1; // along the top edge, leftward
        } else if i == 0 && j > 0 {
            j -= 1; // down the left edge
        }

        // Back at the origin corner: climb one layer, wrapping at the top.
        if i == 0 && j == 0 {
            k += 1;
            if k == shape.nk {
                k = 0;
            }
        }

        Particle { i, j, k }
    }
}
