//! Named scalar parameters stored in the project file.

use indexmap::IndexMap;

/// A named scalar parameter value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    /// An integer parameter (e.g. `time_end`, `z_division`).
    Integer(i64),
    /// A real parameter (e.g. `z_height`).
    Real(f64),
}

/// Ordered table of named parameters, preserving file order.
pub type ParamTable = IndexMap<String, ParamValue>;
