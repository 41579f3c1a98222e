use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AeroForces, ControlInputs, FlightState, Force, ForceCategory, LocalFrameSample,
    PhysicsComponent, SpatialComponent,
};
use crate::config::AircraftAeroConfig;
use crate::systems::aerodynamics::{
    calculate_drag_force, calculate_rudder_force, calculate_wing_force, estimate_flight_state,
};
use crate::systems::propulsion::calculate_thrust_force;

// --- Pure Calculation Logic ---

/// Runs thrust, drag and lift for one tick, each gated by its command.
pub fn calculate_aero_forces(
    sample: &LocalFrameSample,
    controls: &ControlInputs,
    config: &AircraftAeroConfig,
) -> AeroForces {
    let aero = &config.aero;
    let mut forces = AeroForces::default();

    if controls.thrust_active {
        forces.thrust =
            calculate_thrust_force(aero.throttle, aero.max_thrust, &aero.forward_axis);
    }

    if controls.drag_active {
        forces.drag = calculate_drag_force(
            &sample.local_velocity,
            &config.drag_curves,
            controls.airbrake_deployed,
            controls.flaps_deployed,
            aero.airbrake_drag,
            aero.flaps_drag,
        );
    }

    if controls.lift_active {
        forces.wing =
            calculate_wing_force(sample, aero, controls.flaps_deployed, &config.lift_curve);
        forces.rudder = calculate_rudder_force(sample, aero, &config.rudder_curve);
    }

    forces
}

/// One full tick: previous state and current body state in, new state and forces out.
pub fn step_aircraft(
    previous: &FlightState,
    spatial: &SpatialComponent,
    controls: &ControlInputs,
    config: &AircraftAeroConfig,
    dt: f64,
) -> (FlightState, AeroForces) {
    let state = estimate_flight_state(previous, spatial, dt);
    let forces = calculate_aero_forces(&state.sample, controls, config);
    (state, forces)
}

/// Replaces last tick's aerodynamic and propulsive forces with `forces`.
pub fn submit_forces(physics: &mut PhysicsComponent, forces: &AeroForces) {
    physics.clear_category(&ForceCategory::Aerodynamic);
    physics.clear_category(&ForceCategory::Propulsive);

    if forces.thrust != Vector3::zeros() {
        physics.add_force(Force::body(forces.thrust, ForceCategory::Propulsive));
    }
    let aerodynamic = forces.aerodynamic();
    if aerodynamic != Vector3::zeros() {
        physics.add_force(Force::body(aerodynamic, ForceCategory::Aerodynamic));
    }
}

// --- Bevy System ---

/// Computes this tick's forces from the fresh [`FlightState`] and hands them to the
/// integrator through [`PhysicsComponent`]. Must run after `flight_state_system`.
pub fn aero_force_system(
    mut aircraft: Query<(
        Entity,
        &ControlInputs,
        &FlightState,
        &AircraftAeroConfig,
        &mut AeroForces,
        &mut PhysicsComponent,
    )>,
) {
    for (entity, controls, state, config, mut aero_forces, mut physics) in aircraft.iter_mut() {
        let forces = calculate_aero_forces(&state.sample, controls, config);

        debug!(
            "{:?} thrust={:?} drag={:?} wing={:?} rudder={:?}",
            entity, forces.thrust, forces.drag, forces.wing, forces.rudder
        );

        submit_forces(&mut physics, &forces);
        *aero_forces = forces;
    }
}
