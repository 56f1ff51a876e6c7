use super::*;
use crate::domain::params::ParamsError;

const TOL: f32 = 1e-6;

fn core(resolution: u32) -> SimulationCore {
    SimulationCore::new(50.0, resolution).expect("valid dimensions")
}

#[test]
fn flat_water_stays_flat() {
    let mut sim = core(6);
    for _ in 0..25 {
        sim.step();
    }
    for idx in 0..sim.cell_count() {
        let (u, v) = sim.grid.velocity(idx);
        assert_eq!(sim.grid.height(idx), 0.0);
        assert_eq!(u, 0.0);
        assert_eq!(v, 0.0);
    }
}

#[test]
fn border_stays_frozen_under_interior_pokes() {
    let mut sim = core(8);
    assert!(sim.is_edge(0, 0));
    assert!(!sim.is_edge(4, 4));
    assert!(sim.poke(4, 4));
    for tick in 0..30 {
        sim.step();
        if tick == 10 {
            assert!(sim.poke(3, 5));
        }
    }
    for cell in sim.grid.cells.iter().filter(|c| c.edge) {
        assert_eq!(cell.h, 0.0, "border h at ({}, {})", cell.row, cell.col);
        assert_eq!(cell.u, 0.0);
        assert_eq!(cell.v, 0.0);
        assert_eq!(cell.position.y, 0.0);
    }
    // The disturbance did reach the interior.
    assert!(sim.grid.cells.iter().any(|c| c.h != 0.0));
}

#[test]
fn identical_runs_are_bit_identical() {
    let run = || {
        let mut sim = core(10);
        assert!(sim.poke(5, 5));
        for _ in 0..10 {
            sim.step();
        }
        assert!(sim.poke(3, 7));
        for _ in 0..30 {
            sim.step();
        }
        sim
    };
    let a = run();
    let b = run();
    for (ca, cb) in a.grid.cells.iter().zip(b.grid.cells.iter()) {
        assert_eq!(ca.h.to_bits(), cb.h.to_bits());
        assert_eq!(ca.u.to_bits(), cb.u.to_bits());
        assert_eq!(ca.v.to_bits(), cb.v.to_bits());
    }
}

#[test]
fn poke_touches_target_and_linked_neighbors_only() {
    let mut sim = core(4);
    let center = sim.grid.index(2, 2);
    assert!(sim.poke(2, 2));

    let cross = [
        center,
        sim.grid.index(2, 1),
        sim.grid.index(2, 3),
        sim.grid.index(1, 2),
        sim.grid.index(3, 2),
    ];
    for (idx, cell) in sim.grid.cells.iter().enumerate() {
        if cross.contains(&idx) {
            assert_eq!(cell.h, 5.0, "poked cell {idx}");
        } else {
            assert_eq!(cell.h, 0.0, "untouched cell {idx}");
        }
        assert_eq!(cell.u, 0.0);
        assert_eq!(cell.v, 0.0);
    }
}

#[test]
fn poke_on_minimal_grid_is_safe() {
    // resolution 1: four cells, all border, two links each.
    let mut sim = core(1);
    assert!(sim.poke(0, 0));
    assert_eq!(sim.grid.height(0), 5.0);
    assert_eq!(sim.grid.height(1), 5.0);
    assert_eq!(sim.grid.height(2), 5.0);
    assert_eq!(sim.grid.height(3), 0.0);
    // Still steppable; the wave pass has nothing to update.
    sim.step();
    assert_eq!(sim.grid.height(0), 5.0);
}

#[test]
fn poke_out_of_range_is_a_miss() {
    let mut sim = core(4);
    assert!(!sim.poke(5, 0));
    assert!(!sim.poke(0, 99));
    assert!(!sim.poke_index(25));
    assert!(sim.grid.cells.iter().all(|c| c.h == 0.0));
}

#[test]
fn poke_overwrites_rather_than_accumulates() {
    let mut sim = core(4);
    assert!(sim.poke(2, 2));
    assert!(sim.poke(2, 2));
    assert_eq!(sim.height_at(2, 2), 5.0);
}

#[test]
fn poke_index_matches_lattice_poke() {
    let mut sim_a = core(5);
    let mut sim_b = core(5);
    let idx = sim_a.grid.index(2, 3);
    assert!(sim_a.poke(2, 3));
    assert!(sim_b.poke_index(idx));
    for (ca, cb) in sim_a.grid.cells.iter().zip(sim_b.grid.cells.iter()) {
        assert_eq!(ca.h, cb.h);
    }
}

#[test]
fn position_tracks_height() {
    let mut sim = core(6);
    assert!(sim.poke(3, 3));
    for cell in sim.grid.cells.iter() {
        assert_eq!(cell.position.y, cell.h);
    }
    for _ in 0..5 {
        sim.step();
    }
    for cell in sim.grid.cells.iter() {
        assert_eq!(cell.position.y, cell.h);
    }
}

#[test]
fn colors_follow_ramp_after_first_step() {
    let mut sim = core(4);
    let border = sim.params.border_color;
    sim.step();
    // Flat water sits at the bottom of the ramp, border included.
    let expected = sim.params.ramp.color_min;
    for (idx, cell) in sim.grid.cells.iter().enumerate() {
        assert!(cell.color.abs_diff_eq(expected, TOL), "cell {idx}");
    }
    assert!(!sim.grid.color(0).abs_diff_eq(border, TOL));
}

#[test]
fn clear_returns_to_construction_state() {
    let mut sim = core(6);
    assert!(sim.poke(3, 3));
    for _ in 0..12 {
        sim.step();
    }
    assert_eq!(sim.frame(), 12);

    sim.clear();

    assert_eq!(sim.frame(), 0);
    for cell in sim.grid.cells.iter() {
        assert_eq!(cell.h, 0.0);
        assert_eq!(cell.u, 0.0);
        assert_eq!(cell.v, 0.0);
        assert_eq!(cell.position.y, 0.0);
        let expected = if cell.edge {
            sim.params.border_color
        } else {
            sim.params.surface_color
        };
        assert_eq!(cell.color, expected);
    }
    // Transfer buffers follow immediately.
    for idx in 0..sim.cell_count() {
        assert_eq!(sim.render.positions[idx * 3 + 1], 0.0);
    }
}

#[test]
fn load_params_json_rebuilds_grid() {
    let mut sim = core(22);
    sim.enable_perf_metrics(true);
    sim.step();

    sim.load_params_json(r#"{"resolution": 4, "width": 10.0}"#)
        .expect("valid params document");

    assert_eq!(sim.cols(), 5);
    assert_eq!(sim.cell_count(), 25);
    assert_eq!(sim.cell_size(), 2.5);
    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.positions_len(), 25 * 3);
    // The perf toggle survives a reload.
    assert!(sim.perf_enabled);
}

#[test]
fn invalid_params_are_rejected() {
    assert!(matches!(
        SimulationCore::new(50.0, 0),
        Err(ParamsError::ResolutionTooSmall(0))
    ));
    assert!(matches!(
        SimulationCore::new(-1.0, 4),
        Err(ParamsError::InvalidWidth(_))
    ));
    let mut sim = core(4);
    assert!(matches!(
        sim.load_params_json("{bad"),
        Err(ParamsError::Json(_))
    ));
    // A rejected reload leaves the old grid untouched.
    assert_eq!(sim.cols(), 5);
}

#[test]
fn render_buffers_match_cells_after_step() {
    let mut sim = core(3);
    assert!(sim.poke(1, 1));
    sim.step();

    assert_eq!(sim.positions_len(), sim.cell_count() * 3);
    assert_eq!(sim.colors_len(), sim.cell_count() * 3);
    for (idx, cell) in sim.grid.cells.iter().enumerate() {
        let base = idx * 3;
        assert_eq!(sim.render.positions[base], cell.position.x);
        assert_eq!(sim.render.positions[base + 1], cell.h);
        assert_eq!(sim.render.positions[base + 2], cell.position.z);
        assert_eq!(sim.render.colors[base], cell.color.x);
        assert_eq!(sim.render.colors[base + 1], cell.color.y);
        assert_eq!(sim.render.colors[base + 2], cell.color.z);
    }
}

#[test]
fn setters_apply_to_the_next_tick() {
    let mut sim = core(4);
    sim.set_poke_power(2.0);
    assert!(sim.poke(2, 2));
    assert_eq!(sim.height_at(2, 2), 2.0);

    sim.set_gravity(0.3);
    sim.set_damping(0.2);
    sim.set_time_step(0.05);
    assert_eq!(sim.params.gravity, 0.3);
    assert_eq!(sim.params.damping, 0.2);
    assert_eq!(sim.params.time_step, 0.05);
}

#[test]
fn setters_ignore_non_finite_values() {
    let mut sim = core(4);
    sim.set_gravity(0.3);
    sim.set_gravity(f32::NAN);
    assert_eq!(sim.params.gravity, 0.3);

    sim.set_time_step(f32::INFINITY);
    assert_eq!(sim.params.time_step, 0.1);
    sim.set_damping(f32::NEG_INFINITY);
    assert_eq!(sim.params.damping, 1.0);

    // A rejected poke power keeps the default on the next poke.
    sim.set_poke_power(f32::NAN);
    assert!(sim.poke(2, 2));
    assert_eq!(sim.height_at(2, 2), 5.0);
}

#[test]
fn frame_advances_per_step() {
    let mut sim = core(2);
    assert_eq!(sim.frame(), 0);
    sim.step();
    sim.step();
    sim.step();
    assert_eq!(sim.frame(), 3);
}
