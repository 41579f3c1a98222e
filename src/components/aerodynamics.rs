use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Commands from the control layer for one tick. Independent toggles, no interlocks.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Apply engine thrust this tick.
    pub thrust_active: bool,
    /// Apply the drag model this tick.
    pub drag_active: bool,
    /// Apply wing and rudder lift this tick.
    pub lift_active: bool,
    pub flaps_deployed: bool,
    pub airbrake_deployed: bool,
}

impl ControlInputs {
    /// Thrust, drag and lift all on, surfaces retracted.
    pub fn cruise() -> Self {
        Self {
            thrust_active: true,
            drag_active: true,
            lift_active: true,
            ..Default::default()
        }
    }
}

/// Body-frame measurements derived from the integrator state for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalFrameSample {
    /// Velocity in the body frame [m/s]
    pub local_velocity: Vector3<f64>,
    /// Angular velocity in the body frame [rad/s]
    pub local_angular_velocity: Vector3<f64>,
    /// Backward-difference acceleration in the body frame [m/s^2], one tick behind.
    pub local_g_force: Vector3<f64>,
    /// Angle of attack in the pitch plane [rad]
    pub angle_of_attack: f64,
    /// Angle of attack in the yaw plane [rad]
    pub angle_of_attack_yaw: f64,
}

/// Per-aircraft state carried from one tick to the next.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// World velocity seen on the previous tick, for the G-force estimate.
    pub previous_velocity: Vector3<f64>,
    pub sample: LocalFrameSample,
}

impl FlightState {
    /// Seeds the previous velocity so the first tick does not read a spurious jolt.
    pub fn starting_at(velocity: Vector3<f64>) -> Self {
        Self {
            previous_velocity: velocity,
            ..Default::default()
        }
    }
}

/// Body-frame forces produced on the last tick, by source.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AeroForces {
    pub thrust: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub wing: Vector3<f64>,
    pub rudder: Vector3<f64>,
}

impl AeroForces {
    /// Aerodynamic share: drag plus both lifting surfaces.
    pub fn aerodynamic(&self) -> Vector3<f64> {
        self.drag + self.wing + self.rudder
    }

    pub fn total(&self) -> Vector3<f64> {
        self.thrust + self.aerodynamic()
    }
}
