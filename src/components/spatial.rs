use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Rigid-body state as published by the integrator each tick.
///
/// This crate only reads it; the integrator owns and updates it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in world space [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Body moving with `velocity` (world frame) at the given attitude.
    pub fn moving(velocity: Vector3<f64>, attitude: UnitQuaternion<f64>) -> Self {
        Self {
            velocity,
            attitude,
            ..Default::default()
        }
    }

    /// Rotate a world-frame vector into the body frame.
    #[inline]
    pub fn to_body(&self, world: &Vector3<f64>) -> Vector3<f64> {
        self.attitude.inverse_transform_vector(world)
    }
}
