use nalgebra::Vector3;

/// Engine thrust in the body frame: `throttle * max_thrust` along `forward_axis`.
///
/// The throttle is not clamped; a default of 10.0 is a legitimate setting.
pub fn calculate_thrust_force(
    throttle: f64,
    max_thrust: f64,
    forward_axis: &Vector3<f64>,
) -> Vector3<f64> {
    forward_axis * (throttle * max_thrust)
}
