pub mod aerodynamics;
pub mod propulsion;

pub use aerodynamics::{
    aero_force_system, calculate_aero_forces, calculate_drag_force, calculate_lift_components,
    calculate_lift_force, calculate_rudder_force, calculate_wing_force, estimate_flight_state,
    flight_state_system, step_aircraft, submit_forces,
};
pub use propulsion::calculate_thrust_force;
