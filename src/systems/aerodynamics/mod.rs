mod drag;
mod flight_state;
mod force_calculator;
mod lift;

pub use drag::{calculate_drag_force, extra_forward_drag};
pub use flight_state::{angles_of_attack, estimate_flight_state, flight_state_system};
pub use force_calculator::{aero_force_system, calculate_aero_forces, step_aircraft, submit_forces};
pub use lift::{
    calculate_lift_components, calculate_lift_force, calculate_rudder_force,
    calculate_wing_force, LiftComponents,
};
