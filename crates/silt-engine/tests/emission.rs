//! Integration tests: the full emission loop against a recording host.
//!
//! Verifies the call sequence the host sees: clear, one 3D grid write,
//! then per tick a step containing the vector field, the five identity
//! index families, and the particle group.

use silt_core::Entity;
use silt_engine::{run, DebugRun, RunError, PARTICLE_GROUP};
use silt_project::ProjectError;
use silt_test_utils::{recording_project, Event};

#[test]
fn time_end_zero_emits_exactly_one_step_at_origin() {
    let mut project = recording_project(4, 3, 0, 1, 2.0);
    let summary = run(&mut project, |_, _| {}).unwrap();

    assert_eq!(summary.steps_emitted, 1);
    assert_eq!(project.step_times(), vec![0.0]);
    assert_eq!(project.particle_positions(), vec![(0.0, 0.0, 0.0)]);
}

#[test]
fn clear_comes_first_and_the_grid_is_written_once_before_any_step() {
    let mut project = recording_project(4, 3, 3, 2, 6.0);
    run(&mut project, |_, _| {}).unwrap();

    let events = project.events();
    assert_eq!(events[0], Event::ClearSolution);
    assert!(matches!(events[1], Event::Grid3d(_)));

    let grid_writes = project.events_where(|e| matches!(e, Event::Grid3d(_)));
    assert_eq!(grid_writes.len(), 1);

    let first_step = events
        .iter()
        .position(|e| matches!(e, Event::StepBegin { .. }))
        .unwrap();
    assert!(first_step > 1);

    if let Event::Grid3d(grid) = &events[1] {
        assert_eq!(grid.shape().nk, 3);
        assert_eq!(grid.z()[(0, 0, 2)], 6.0);
    }
}

#[test]
fn each_step_carries_the_full_field_block_in_order() {
    let mut project = recording_project(3, 3, 2, 1, 1.0);
    run(&mut project, |_, _| {}).unwrap();

    assert_eq!(project.step_times(), vec![0.0, 1.0, 2.0]);

    let real_fields = project.events_where(|e| matches!(e, Event::RealField { .. }));
    let integer_fields = project.events_where(|e| matches!(e, Event::IntegerField { .. }));
    // 3 vector components and 5 families x 3 axes, per step.
    assert_eq!(real_fields.len(), 3 * 3);
    assert_eq!(integer_fields.len(), 3 * 15);

    // First step's fields, in emission order.
    let names: Vec<&str> = project
        .events()
        .iter()
        .filter_map(|e| match e {
            Event::RealField { name, .. } | Event::IntegerField { name, .. } => {
                Some(name.as_str())
            }
            _ => None,
        })
        .take(18)
        .collect();
    assert_eq!(
        names,
        vec![
            "vectorX",
            "vectorY",
            "vectorZ",
            "node_index_i",
            "node_index_j",
            "node_index_k",
            "cell_index_i",
            "cell_index_j",
            "cell_index_k",
            "iface_index_i",
            "iface_index_j",
            "iface_index_k",
            "jface_index_i",
            "jface_index_j",
            "jface_index_k",
            "kface_index_i",
            "kface_index_j",
            "kface_index_k",
        ]
    );

    // Families carried alongside the names match the name prefixes.
    for event in project.events_where(|e| matches!(e, Event::IntegerField { .. })) {
        if let Event::IntegerField { family, name, .. } = event {
            assert!(name.starts_with(family.label()));
        }
    }
}

#[test]
fn the_vector_field_is_never_recomputed_between_steps() {
    let mut project = recording_project(4, 2, 5, 2, 3.0);
    run(&mut project, |_, _| {}).unwrap();

    let mut per_step: Vec<&Vec<f64>> = Vec::new();
    for event in project.events() {
        if let Event::RealField { name, values, .. } = event {
            if name == "vectorX" {
                per_step.push(values);
            }
        }
    }
    assert_eq!(per_step.len(), 6);
    assert!(per_step.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn particle_channels_encode_a_diagonal_matrix() {
    let mut project = recording_project(4, 3, 1, 1, 2.0);
    run(&mut project, |_, _| {}).unwrap();

    let begins = project.events_where(|e| matches!(e, Event::ParticleBegin { .. }));
    assert_eq!(begins.len(), 2);
    assert!(begins
        .iter()
        .all(|e| *e == &Event::ParticleBegin { name: PARTICLE_GROUP.into() }));

    // Channels of the second step: particle has moved to (1, 0, 0).
    let channels: Vec<(String, f64)> = project
        .events()
        .iter()
        .filter_map(|e| match e {
            Event::ParticleReal { name, value } => Some((name.clone(), *value)),
            _ => None,
        })
        .skip(12)
        .collect();
    assert_eq!(channels.len(), 12);

    let vx = 0.25; // i/ni = 1/4
    let expected = [
        ("particle_vectorX", vx),
        ("particle_vectorY", 0.0),
        ("particle_vectorZ", 0.0),
        ("particle_vector_xX", vx),
        ("particle_vector_xY", 0.0),
        ("particle_vector_xZ", 0.0),
        ("particle_vector_yX", 0.0),
        ("particle_vector_yY", 0.0),
        ("particle_vector_yZ", 0.0),
        ("particle_vector_zX", 0.0),
        ("particle_vector_zY", 0.0),
        ("particle_vector_zZ", 0.0),
    ];
    for ((name, value), (expected_name, expected_value)) in channels.iter().zip(expected) {
        assert_eq!(name, expected_name);
        assert_eq!(*value, expected_value);
    }
}

#[test]
fn the_particle_climbs_a_layer_after_one_full_lap() {
    // 4x3 perimeter lap = 10 ticks; z_division 1 gives layers at 0 and 5.
    let mut project = recording_project(4, 3, 10, 1, 5.0);
    run(&mut project, |_, _| {}).unwrap();

    let positions = project.particle_positions();
    assert_eq!(positions.len(), 11);
    assert_eq!(positions[0], (0.0, 0.0, 0.0));
    // Walking the unit-grid perimeter: bottom edge first.
    assert_eq!(positions[1], (1.0, 0.0, 0.0));
    assert_eq!(positions[4], (3.0, 1.0, 0.0));
    // Lap complete: back at the origin corner, one layer up.
    assert_eq!(positions[10], (0.0, 0.0, 5.0));
}

#[test]
fn degenerate_single_cell_grid_cycles_layers() {
    let mut project = recording_project(1, 1, 5, 2, 3.0);
    run(&mut project, |_, _| {}).unwrap();

    let z: Vec<f64> = project
        .particle_positions()
        .iter()
        .map(|&(_, _, z)| z)
        .collect();
    assert_eq!(z, vec![0.0, 1.5, 3.0, 0.0, 1.5, 3.0]);
}

#[test]
fn progress_reports_every_tick_in_order() {
    let mut project = recording_project(2, 2, 4, 0, 0.0);
    let mut seen = Vec::new();
    let summary = run(&mut project, |tick, time_end| seen.push((tick, time_end))).unwrap();

    assert_eq!(summary.steps_emitted, 5);
    assert_eq!(seen, vec![(0, 4), (1, 4), (2, 4), (3, 4), (4, 4)]);
}

#[test]
fn prepare_surfaces_missing_parameters_before_any_step() {
    let mut project = silt_test_utils::RecordingProject::new(
        silt_test_utils::unit_grid(3, 3),
        silt_project::ParamTable::new(),
    );
    let err = DebugRun::prepare(&mut project).unwrap_err();
    assert!(matches!(
        err,
        RunError::Project(ProjectError::UnknownParameter { .. })
    ));
    assert!(project.step_times().is_empty());
}

#[test]
fn zero_divisions_still_runs_on_a_single_layer() {
    let mut project = recording_project(3, 3, 2, 0, 7.0);
    let summary = run(&mut project, |_, _| {}).unwrap();
    assert_eq!(summary.shape.nk, 1);

    // With one layer the lap never leaves z = 0.
    assert!(project
        .particle_positions()
        .iter()
        .all(|&(_, _, z)| z == 0.0));

    // Entity families with a zero-sized axis emit empty arrays.
    let empty_cells = project.events_where(|e| {
        matches!(
            e,
            Event::IntegerField { family: Entity::Cell, values, .. } if values.is_empty()
        )
    });
    assert_eq!(empty_cells.len(), 3 * 3);
}
