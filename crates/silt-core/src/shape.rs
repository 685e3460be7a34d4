//! Structured-grid dimensions and topological entity families.

use std::fmt;

/// Node dimensions of a structured grid, `(ni, nj, nk)`.
///
/// `ni`/`nj` come from the 2D grid stored in the project file; `nk` is the
/// layer count produced by vertical extrusion (`z_division + 1`). A 2D grid
/// is represented with `nk = 1`.
///
/// # Examples
///
/// ```
/// use silt_core::{Entity, GridShape};
///
/// let shape = GridShape::new(4, 3, 2);
/// assert_eq!(shape.count(Entity::Node), 24);
/// assert_eq!(shape.dims(Entity::Cell), (3, 2, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    /// Node count along the i axis.
    pub ni: usize,
    /// Node count along the j axis.
    pub nj: usize,
    /// Node count along the k (vertical) axis.
    pub nk: usize,
}

impl GridShape {
    /// Create a shape from node counts along each axis.
    pub fn new(ni: usize, nj: usize, nk: usize) -> Self {
        Self { ni, nj, nk }
    }

    /// Dimensions of the array holding one value per entity of `family`.
    ///
    /// Cell-centered axes have one fewer entry than the node count; an
    /// i-face spans a cell in j and k but sits on a node plane in i, and
    /// so on for the other families. Degenerate node counts saturate to
    /// zero rather than underflowing.
    pub fn dims(&self, family: Entity) -> (usize, usize, usize) {
        let (ci, cj, ck) = (
            self.ni.saturating_sub(1),
            self.nj.saturating_sub(1),
            self.nk.saturating_sub(1),
        );
        match family {
            Entity::Node => (self.ni, self.nj, self.nk),
            Entity::Cell => (ci, cj, ck),
            Entity::IFace => (self.ni, cj, self.nk),
            Entity::JFace => (ci, self.nj, self.nk),
            Entity::KFace => (self.ni, self.nj, ck),
        }
    }

    /// Total number of entities of `family` in this grid.
    pub fn count(&self, family: Entity) -> usize {
        let (di, dj, dk) = self.dims(family);
        di * dj * dk
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.ni, self.nj, self.nk)
    }
}

/// The five topological entity families of a structured grid.
///
/// Solution fields are attached to exactly one family; the family fixes
/// the array shape via [`GridShape::dims`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entity {
    /// Grid points.
    Node,
    /// Hexahedral cells between adjacent node planes.
    Cell,
    /// Cell faces normal to the i axis.
    IFace,
    /// Cell faces normal to the j axis.
    JFace,
    /// Cell faces normal to the k axis.
    KFace,
}

impl Entity {
    /// All five families, in the order solution fields are emitted.
    pub const ALL: [Entity; 5] = [
        Entity::Node,
        Entity::Cell,
        Entity::IFace,
        Entity::JFace,
        Entity::KFace,
    ];

    /// Lowercase name used to build emitted field names
    /// (e.g. `"cell"` in `cell_index_i`).
    pub fn label(&self) -> &'static str {
        match self {
            Entity::Node => "node",
            Entity::Cell => "cell",
            Entity::IFace => "iface",
            Entity::JFace => "jface",
            Entity::KFace => "kface",
        }
    }
}
