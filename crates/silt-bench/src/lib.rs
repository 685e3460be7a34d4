//! Benchmark profiles for the Silt debug-dataset generator.
//!
//! Provides pre-built project inputs at two sizes:
//!
//! - [`reference_grid`]: 100x100 nodes, 10 vertical divisions (~110K nodes)
//! - [`stress_grid`]: 316x316 nodes, 20 vertical divisions (~2.1M nodes)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use silt_grid::Grid2d;
use silt_project::{ParamTable, ParamValue};

/// A unit-spaced square grid of `n` x `n` nodes.
pub fn square_grid(n: usize) -> Grid2d {
    let mut x = Vec::with_capacity(n * n);
    let mut y = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            x.push(i as f64);
            y.push(j as f64);
        }
    }
    Grid2d::from_flat(n, n, x, y).expect("square grid dimensions are consistent")
}

/// Standard parameter table for a run of `time_end` ticks.
pub fn run_params(time_end: i64, z_division: i64, z_height: f64) -> ParamTable {
    let mut params = ParamTable::new();
    params.insert("time_end".into(), ParamValue::Integer(time_end));
    params.insert("z_division".into(), ParamValue::Integer(z_division));
    params.insert("z_height".into(), ParamValue::Real(z_height));
    params
}

/// Reference profile: 100x100 nodes, 10 vertical divisions.
pub fn reference_grid() -> (Grid2d, ParamTable) {
    (square_grid(100), run_params(5, 10, 10.0))
}

/// Stress profile: 316x316 nodes, 20 vertical divisions.
pub fn stress_grid() -> (Grid2d, ParamTable) {
    (square_grid(316), run_params(5, 20, 10.0))
}
