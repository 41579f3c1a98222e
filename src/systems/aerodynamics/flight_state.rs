use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{FlightState, LocalFrameSample, SpatialComponent};
use crate::config::PhysicsConfig;
use crate::utils::AOA_MIN_VELOCITY_SQUARED;

/// Angles of attack `(pitch, yaw)` in radians for a body-frame velocity.
///
/// Both read zero below the hover threshold, where `atan2` only returns noise.
pub fn angles_of_attack(local_velocity: &Vector3<f64>) -> (f64, f64) {
    if local_velocity.norm_squared() < AOA_MIN_VELOCITY_SQUARED {
        return (0.0, 0.0);
    }

    let pitch = (-local_velocity.y).atan2(local_velocity.z);
    let yaw = local_velocity.x.atan2(local_velocity.z);
    (pitch, yaw)
}

/// Advances the per-aircraft state by one tick.
///
/// A `dt` that is not finite and positive skips the G-force update and carries the last
/// estimate over; every other field is still refreshed.
pub fn estimate_flight_state(
    previous: &FlightState,
    spatial: &SpatialComponent,
    dt: f64,
) -> FlightState {
    let local_velocity = spatial.to_body(&spatial.velocity);
    let local_angular_velocity = spatial.to_body(&spatial.angular_velocity);
    let (angle_of_attack, angle_of_attack_yaw) = angles_of_attack(&local_velocity);

    let local_g_force = if dt.is_finite() && dt > 0.0 {
        let acceleration = (spatial.velocity - previous.previous_velocity) / dt;
        spatial.to_body(&acceleration)
    } else {
        warn!("Skipping G-force update for non-positive timestep {}", dt);
        previous.sample.local_g_force
    };

    FlightState {
        previous_velocity: spatial.velocity,
        sample: LocalFrameSample {
            local_velocity,
            local_angular_velocity,
            local_g_force,
            angle_of_attack,
            angle_of_attack_yaw,
        },
    }
}

pub fn flight_state_system(
    mut query: Query<(&SpatialComponent, &mut FlightState)>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;
    for (spatial, mut state) in query.iter_mut() {
        *state = estimate_flight_state(&state, spatial, dt);
    }
}
