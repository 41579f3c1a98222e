use nalgebra::Vector3;

use crate::components::{LocalFrameSample, ResponseCurve};
use crate::config::AeroConfig;
use crate::utils::{normalize_or_none, project_on_plane, LIFT_MIN_VELOCITY_SQUARED};

/// Lift and the induced drag that comes with it, both in the body frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LiftComponents {
    pub lift: Vector3<f64>,
    pub induced_drag: Vector3<f64>,
}

impl LiftComponents {
    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.induced_drag
    }
}

/// Lift of one surface spanning `right_axis`, split into lift and induced drag.
///
/// Only chordwise flow (velocity with the span component removed) counts. The lift
/// coefficient comes from `aoa_curve` at the angle of attack in degrees; lift is normal to
/// the chordwise flow and induced drag opposes it with magnitude `v^2 * cl^2 * induced_drag`.
pub fn calculate_lift_components(
    local_velocity: &Vector3<f64>,
    angle_of_attack: f64,
    right_axis: &Vector3<f64>,
    lift_power: f64,
    induced_drag: f64,
    aoa_curve: &ResponseCurve,
) -> LiftComponents {
    if local_velocity.norm_squared() < LIFT_MIN_VELOCITY_SQUARED {
        return LiftComponents::default();
    }

    let lift_velocity = project_on_plane(local_velocity, right_axis);
    let Some(flow_direction) = normalize_or_none(&lift_velocity) else {
        return LiftComponents::default();
    };
    let velocity_squared = lift_velocity.norm_squared();

    let coefficient = aoa_curve.evaluate(angle_of_attack.to_degrees());
    let lift_force = velocity_squared * coefficient * lift_power;
    let lift_direction =
        normalize_or_none(&flow_direction.cross(right_axis)).unwrap_or_else(Vector3::zeros);

    let induced_drag_force = velocity_squared * coefficient * coefficient * induced_drag;

    LiftComponents {
        lift: lift_direction * lift_force,
        induced_drag: -flow_direction * induced_drag_force,
    }
}

/// [`calculate_lift_components`] summed into one body-frame force.
pub fn calculate_lift_force(
    local_velocity: &Vector3<f64>,
    angle_of_attack: f64,
    right_axis: &Vector3<f64>,
    lift_power: f64,
    induced_drag: f64,
    aoa_curve: &ResponseCurve,
) -> Vector3<f64> {
    calculate_lift_components(
        local_velocity,
        angle_of_attack,
        right_axis,
        lift_power,
        induced_drag,
        aoa_curve,
    )
    .total()
}

/// Main wing: spans body right, pitch angle of attack, flaps bias the angle and add power.
pub fn calculate_wing_force(
    sample: &LocalFrameSample,
    config: &AeroConfig,
    flaps_deployed: bool,
    lift_curve: &ResponseCurve,
) -> Vector3<f64> {
    let (aoa_bias, power_bonus) = if flaps_deployed {
        (config.flaps_aoa_bias.to_radians(), config.flaps_lift_power)
    } else {
        (0.0, 0.0)
    };

    calculate_lift_force(
        &sample.local_velocity,
        sample.angle_of_attack + aoa_bias,
        &Vector3::x(),
        config.lift_power + power_bonus,
        config.induced_drag,
        lift_curve,
    )
}

/// Vertical stabiliser: spans body up, yaw angle of attack.
pub fn calculate_rudder_force(
    sample: &LocalFrameSample,
    config: &AeroConfig,
    rudder_curve: &ResponseCurve,
) -> Vector3<f64> {
    calculate_lift_force(
        &sample.local_velocity,
        sample.angle_of_attack_yaw,
        &Vector3::y(),
        config.rudder_power,
        config.induced_drag,
        rudder_curve,
    )
}
