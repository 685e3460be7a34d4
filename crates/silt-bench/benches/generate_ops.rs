//! Criterion micro-benchmarks for extrusion, field generation, and the
//! solution codec.

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use silt_bench::{reference_grid, square_grid};
use silt_core::GridShape;
use silt_engine::DebugRun;
use silt_fields::{IndexFields, VectorField};
use silt_grid::extrude;
use silt_project::ProjectFile;

/// Benchmark: extrude a 100x100 grid into 11 layers.
fn bench_extrude_reference(c: &mut Criterion) {
    let grid = square_grid(100);
    c.bench_function("extrude_100x100x11", |b| {
        b.iter(|| extrude(black_box(&grid), 10, 10.0))
    });
}

/// Benchmark: generate the vector field over ~110K nodes.
fn bench_vector_field(c: &mut Criterion) {
    let shape = GridShape::new(100, 100, 11);
    c.bench_function("vector_field_100x100x11", |b| {
        b.iter(|| VectorField::fractional(black_box(shape)))
    });
}

/// Benchmark: generate all five identity index families.
fn bench_index_fields(c: &mut Criterion) {
    let shape = GridShape::new(100, 100, 11);
    c.bench_function("index_fields_100x100x11", |b| {
        b.iter(|| IndexFields::all_families(black_box(shape)))
    });
}

/// Benchmark: one full run (prepare + 6 steps) into an in-memory project.
fn bench_full_run(c: &mut Criterion) {
    let (grid, params) = reference_grid();
    c.bench_function("full_run_100x100x11_6steps", |b| {
        b.iter(|| {
            let project = ProjectFile::create(Cursor::new(Vec::new()), &params, &grid).unwrap();
            let mut project = ProjectFile::open(project.into_inner()).unwrap();
            let prepared = DebugRun::prepare(&mut project).unwrap();
            prepared.emit(&mut project, |_, _| {}).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_extrude_reference,
    bench_vector_field,
    bench_index_fields,
    bench_full_run
);
criterion_main!(benches);
