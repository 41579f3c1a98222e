use nalgebra::Vector3;

/// Assert that every component of a vector is finite
#[track_caller]
pub fn assert_finite(label: &str, v: &Vector3<f64>) {
    assert!(
        v.iter().all(|c| c.is_finite()),
        "{} is not finite: {:?}",
        label,
        v
    );
}

/// Assert that `force` points against `velocity` (or is zero)
#[track_caller]
pub fn assert_opposes(force: &Vector3<f64>, velocity: &Vector3<f64>) {
    assert!(
        force.dot(velocity) <= 1e-9,
        "force {:?} does not oppose velocity {:?}",
        force,
        velocity
    );
}
