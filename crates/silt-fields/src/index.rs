//! Identity index fields.

use silt_core::{Array3, Entity, GridShape};

/// A grid axis, used to name and select index-field components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The i (first, fastest-varying) axis.
    I,
    /// The j axis.
    J,
    /// The k (vertical) axis.
    K,
}

impl Axis {
    /// All three axes in emission order.
    pub const ALL: [Axis; 3] = [Axis::I, Axis::J, Axis::K];

    /// Lowercase axis letter used in emitted field names.
    pub fn label(&self) -> &'static str {
        match self {
            Axis::I => "i",
            Axis::J => "j",
            Axis::K => "k",
        }
    }
}

/// The identity index triple for one entity family.
///
/// Each component array holds, at every position, that position's own
/// coordinate index along one axis. The values carry no physics; they
/// exist so a downstream viewer can confirm that array ordering survived
/// the trip through the host intact.
///
/// # Examples
///
/// ```
/// use silt_core::{Entity, GridShape};
/// use silt_fields::{Axis, IndexFields};
///
/// let cells = IndexFields::identity(GridShape::new(4, 3, 2), Entity::Cell);
/// assert_eq!(cells.component(Axis::J)[(2, 1, 0)], 1);
/// assert_eq!(cells.name(Axis::J), "cell_index_j");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IndexFields {
    family: Entity,
    i: Array3<i32>,
    j: Array3<i32>,
    k: Array3<i32>,
}

impl IndexFields {
    /// Build the identity index fields for `family` on a grid of `shape`.
    pub fn identity(shape: GridShape, family: Entity) -> Self {
        let dims = shape.dims(family);
        Self {
            family,
            i: Array3::from_fn(dims, |i, _, _| i as i32),
            j: Array3::from_fn(dims, |_, j, _| j as i32),
            k: Array3::from_fn(dims, |_, _, k| k as i32),
        }
    }

    /// Identity fields for all five entity families, in emission order.
    pub fn all_families(shape: GridShape) -> Vec<IndexFields> {
        Entity::ALL
            .iter()
            .map(|&family| Self::identity(shape, family))
            .collect()
    }

    /// The entity family these fields are attached to.
    pub fn family(&self) -> Entity {
        self.family
    }

    /// The component array recording indices along `axis`.
    pub fn component(&self, axis: Axis) -> &Array3<i32> {
        match axis {
            Axis::I => &self.i,
            Axis::J => &self.j,
            Axis::K => &self.k,
        }
    }

    /// Emitted field name for one component, e.g. `"iface_index_k"`.
    pub fn name(&self, axis: Axis) -> String {
        format!("{}_index_{}", self.family.label(), axis.label())
    }
}
