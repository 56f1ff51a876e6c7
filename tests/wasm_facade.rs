#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use ripple_engine::Simulation;

#[wasm_bindgen_test]
fn simulation_builds_steps_and_exposes_buffers() {
    let mut sim = Simulation::new(50.0, 8).expect("valid dimensions");
    assert!(sim.poke(4, 4));
    sim.step();
    sim.step();

    assert_eq!(sim.frame(), 2);
    let layout = sim.abi_layout();
    assert_eq!(layout.positions_len_elements(), 81 * 3);
    assert_eq!(layout.colors_len_elements(), 81 * 3);
}

#[wasm_bindgen_test]
fn invalid_dimensions_surface_as_js_errors() {
    assert!(Simulation::new(50.0, 0).is_err());
    assert!(Simulation::with_params("{bad").is_err());
}
