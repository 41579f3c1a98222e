use nalgebra::Vector3;

/// Scales each component of `value` by a factor chosen from the sign of that component.
///
/// Strictly positive components use the `pos_*` factor, strictly negative ones the
/// `neg_*` factor and exact zeros are left untouched. This lets a response differ
/// between e.g. nose-first and tail-first flow without sign checks at each call site.
#[allow(clippy::too_many_arguments)]
pub fn scale_directional(
    value: &Vector3<f64>,
    pos_x: f64,
    neg_x: f64,
    pos_y: f64,
    neg_y: f64,
    pos_z: f64,
    neg_z: f64,
) -> Vector3<f64> {
    Vector3::new(
        scale_signed(value.x, pos_x, neg_x),
        scale_signed(value.y, pos_y, neg_y),
        scale_signed(value.z, pos_z, neg_z),
    )
}

#[inline]
fn scale_signed(component: f64, pos: f64, neg: f64) -> f64 {
    if component > 0.0 {
        component * pos
    } else if component < 0.0 {
        component * neg
    } else {
        component
    }
}

/// Unit vector along `value`, or `None` when it is too short to normalize safely.
#[inline]
pub fn normalize_or_none(value: &Vector3<f64>) -> Option<Vector3<f64>> {
    value.try_normalize(super::MIN_NORMALIZE_NORM)
}

/// Removes the component of `value` along `axis` (which need not be unit length).
pub fn project_on_plane(value: &Vector3<f64>, axis: &Vector3<f64>) -> Vector3<f64> {
    let axis_norm_sq = axis.norm_squared();
    if axis_norm_sq <= f64::EPSILON {
        return *value;
    }
    value - axis * (value.dot(axis) / axis_norm_sq)
}
