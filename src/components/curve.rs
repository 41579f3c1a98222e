use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("Curve has no keys")]
    Empty,
    #[error("Curve key {index} is not finite: ({input}, {output})")]
    NonFinite {
        index: usize,
        input: f64,
        output: f64,
    },
    #[error("Curve inputs must be strictly increasing: key {index} ({input}) follows {previous}")]
    NotIncreasing {
        index: usize,
        input: f64,
        previous: f64,
    },
}

/// A single breakpoint of a [`ResponseCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub input: f64,
    pub output: f64,
}

impl CurveKey {
    pub const fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }
}

impl From<(f64, f64)> for CurveKey {
    fn from((input, output): (f64, f64)) -> Self {
        Self { input, output }
    }
}

/// How a curve fills the gap between two neighbouring keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMode {
    #[default]
    Linear,
    /// Holds the left key's output until the next key.
    Constant,
    /// Smoothstep blend, flat at every key.
    Smooth,
}

/// Scalar response curve backed by a breakpoint table.
///
/// Inputs outside the authored range clamp to the nearest end key, the curve never
/// extrapolates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawResponseCurve", into = "RawResponseCurve")]
pub struct ResponseCurve {
    keys: Vec<CurveKey>,
    interpolation: InterpolationMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawResponseCurve {
    keys: Vec<CurveKey>,
    #[serde(default)]
    interpolation: InterpolationMode,
}

impl TryFrom<RawResponseCurve> for ResponseCurve {
    type Error = CurveError;

    fn try_from(raw: RawResponseCurve) -> Result<Self, Self::Error> {
        ResponseCurve::new(raw.keys, raw.interpolation)
    }
}

impl From<ResponseCurve> for RawResponseCurve {
    fn from(curve: ResponseCurve) -> Self {
        Self {
            keys: curve.keys,
            interpolation: curve.interpolation,
        }
    }
}

impl ResponseCurve {
    pub fn new(keys: Vec<CurveKey>, interpolation: InterpolationMode) -> Result<Self, CurveError> {
        if keys.is_empty() {
            return Err(CurveError::Empty);
        }

        for (index, key) in keys.iter().enumerate() {
            if !key.input.is_finite() || !key.output.is_finite() {
                return Err(CurveError::NonFinite {
                    index,
                    input: key.input,
                    output: key.output,
                });
            }
        }

        for (index, pair) in keys.windows(2).enumerate() {
            if pair[1].input <= pair[0].input {
                return Err(CurveError::NotIncreasing {
                    index: index + 1,
                    input: pair[1].input,
                    previous: pair[0].input,
                });
            }
        }

        Ok(Self {
            keys,
            interpolation,
        })
    }

    /// Linear curve through `points`, given as `(input, output)` pairs.
    pub fn linear(points: &[(f64, f64)]) -> Result<Self, CurveError> {
        Self::new(
            points.iter().copied().map(CurveKey::from).collect(),
            InterpolationMode::Linear,
        )
    }

    /// Linear curve from a built-in table known to be valid.
    pub(crate) fn preset(points: &[(f64, f64)]) -> Self {
        debug_assert!(Self::linear(points).is_ok(), "invalid preset curve");
        Self {
            keys: points.iter().copied().map(CurveKey::from).collect(),
            interpolation: InterpolationMode::Linear,
        }
    }

    /// Curve that returns `value` for every input.
    pub fn constant(value: f64) -> Self {
        Self {
            keys: vec![CurveKey::new(0.0, value)],
            interpolation: InterpolationMode::Constant,
        }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    /// Inclusive input range covered by the keys.
    pub fn domain(&self) -> (f64, f64) {
        // `new` guarantees at least one key.
        let first = self.keys[0].input;
        let last = self.keys[self.keys.len() - 1].input;
        (first, last)
    }

    pub fn evaluate(&self, input: f64) -> f64 {
        let first = self.keys[0];
        let last = self.keys[self.keys.len() - 1];

        if input.is_nan() || input <= first.input {
            return first.output;
        }
        if input >= last.input {
            return last.output;
        }

        // First key strictly greater than `input`; lies in 1..len by the checks above.
        let upper = self.keys.partition_point(|key| key.input <= input);
        let left = self.keys[upper - 1];
        let right = self.keys[upper];

        let t = (input - left.input) / (right.input - left.input);
        let blend = match self.interpolation {
            InterpolationMode::Linear => t,
            InterpolationMode::Constant => 0.0,
            InterpolationMode::Smooth => t * t * (3.0 - 2.0 * t),
        };

        left.output + (right.output - left.output) * blend
    }
}

impl Default for ResponseCurve {
    fn default() -> Self {
        Self::constant(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn ramp(mode: InterpolationMode) -> ResponseCurve {
        ResponseCurve::new(
            vec![
                CurveKey::new(0.0, 0.0),
                CurveKey::new(10.0, 1.0),
                CurveKey::new(20.0, 0.5),
            ],
            mode,
        )
        .unwrap()
    }

    #[test]
    fn test_linear_interpolation() {
        let curve = ramp(InterpolationMode::Linear);

        assert_relative_eq!(curve.evaluate(0.0), 0.0);
        assert_relative_eq!(curve.evaluate(5.0), 0.5);
        assert_relative_eq!(curve.evaluate(10.0), 1.0);
        assert_relative_eq!(curve.evaluate(15.0), 0.75);
    }

    #[test]
    fn test_out_of_range_inputs_clamp() {
        let curve = ramp(InterpolationMode::Linear);

        assert_relative_eq!(curve.evaluate(-100.0), 0.0);
        assert_relative_eq!(curve.evaluate(1e9), 0.5);
        assert_relative_eq!(curve.evaluate(f64::NAN), 0.0);
        assert_relative_eq!(curve.evaluate(f64::INFINITY), 0.5);
    }

    #[test]
    fn test_constant_mode_holds_left_key() {
        let curve = ramp(InterpolationMode::Constant);

        assert_relative_eq!(curve.evaluate(9.99), 0.0);
        assert_relative_eq!(curve.evaluate(10.0), 1.0);
        assert_relative_eq!(curve.evaluate(19.0), 1.0);
    }

    #[test]
    fn test_smooth_mode_is_eased() {
        let curve = ramp(InterpolationMode::Smooth);

        // Midpoint of smoothstep is the midpoint of the segment.
        assert_relative_eq!(curve.evaluate(5.0), 0.5);
        // Eased near the keys: less than linear after the first key.
        assert!(curve.evaluate(1.0) < 0.1);
        assert!(curve.evaluate(9.0) > 0.9);
    }

    #[test]
    fn test_constant_curve() {
        let curve = ResponseCurve::constant(0.02);

        for x in [-5.0, 0.0, 3.0, 500.0] {
            assert_relative_eq!(curve.evaluate(x), 0.02);
        }
        assert_eq!(curve.domain(), (0.0, 0.0));
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            ResponseCurve::new(Vec::new(), InterpolationMode::Linear),
            Err(CurveError::Empty)
        );
        assert!(matches!(
            ResponseCurve::linear(&[(0.0, 1.0), (0.0, 2.0)]),
            Err(CurveError::NotIncreasing { index: 1, .. })
        ));
        assert!(matches!(
            ResponseCurve::linear(&[(0.0, 1.0), (1.0, f64::NAN)]),
            Err(CurveError::NonFinite { index: 1, .. })
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let good: ResponseCurve = serde_json::from_str(
            r#"{"keys": [{"input": 0.0, "output": 1.0}, {"input": 2.0, "output": 3.0}]}"#,
        )
        .unwrap();
        assert_eq!(good.interpolation(), InterpolationMode::Linear);
        assert_relative_eq!(good.evaluate(1.0), 2.0);

        let bad = serde_json::from_str::<ResponseCurve>(
            r#"{"keys": [{"input": 2.0, "output": 1.0}, {"input": 1.0, "output": 3.0}]}"#,
        );
        assert!(bad.is_err());
    }
}
