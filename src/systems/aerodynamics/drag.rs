use nalgebra::Vector3;

use crate::config::DragCurveSet;
use crate::utils::{normalize_or_none, scale_directional};

/// Extra forward drag coefficient from the deployed surfaces. The two toggles add.
pub fn extra_forward_drag(
    airbrake_active: bool,
    flaps_active: bool,
    airbrake_drag: f64,
    flaps_drag: f64,
) -> f64 {
    let airbrake = if airbrake_active { airbrake_drag } else { 0.0 };
    let flaps = if flaps_active { flaps_drag } else { 0.0 };
    airbrake + flaps
}

/// Quadratic drag opposing the body-frame velocity.
///
/// Each signed axis has its own coefficient curve, sampled at the speed along that axis;
/// the coefficients are blended by the flow direction and the resulting magnitude scales
/// with speed squared. Zero velocity yields zero force.
pub fn calculate_drag_force(
    local_velocity: &Vector3<f64>,
    curves: &DragCurveSet,
    airbrake_active: bool,
    flaps_active: bool,
    airbrake_drag: f64,
    flaps_drag: f64,
) -> Vector3<f64> {
    let Some(direction) = normalize_or_none(local_velocity) else {
        return Vector3::zeros();
    };
    let velocity_squared = local_velocity.norm_squared();

    let extra = extra_forward_drag(airbrake_active, flaps_active, airbrake_drag, flaps_drag);

    let coefficient = scale_directional(
        &direction,
        curves.right.evaluate(local_velocity.x.abs()),
        curves.left.evaluate(local_velocity.x.abs()),
        curves.top.evaluate(local_velocity.y.abs()),
        curves.bottom.evaluate(local_velocity.y.abs()),
        curves.forward.evaluate(local_velocity.z.abs()) + extra,
        curves.back.evaluate(local_velocity.z.abs()),
    );

    -direction * (coefficient.norm() * velocity_squared)
}
