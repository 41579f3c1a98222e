use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::ResponseCurve;
use crate::config::ConfigError;

/// Scalar tuning for one airframe. Read every tick, set at configuration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroConfig {
    /// Multiplies `max_thrust` directly and is not clamped. Whether it should be a
    /// [0, 1] fraction is still undecided.
    pub throttle: f64,
    pub max_thrust: f64,
    /// Added to the forward drag coefficient while the airbrake is out.
    pub airbrake_drag: f64,
    /// Added to the forward drag coefficient while the flaps are down.
    pub flaps_drag: f64,
    /// Added to `lift_power` while the flaps are down.
    pub flaps_lift_power: f64,
    /// Added to the wing angle of attack while the flaps are down [deg]
    pub flaps_aoa_bias: f64,
    pub induced_drag: f64,
    pub lift_power: f64,
    pub rudder_power: f64,
    /// Body-frame direction thrust is applied along.
    pub forward_axis: Vector3<f64>,
}

impl Default for AeroConfig {
    fn default() -> Self {
        Self {
            throttle: 10.0,
            max_thrust: 50.0,
            airbrake_drag: 0.1,
            flaps_drag: 0.02,
            flaps_lift_power: 0.2,
            flaps_aoa_bias: 5.0,
            induced_drag: 0.02,
            lift_power: 1.0,
            rudder_power: 0.5,
            forward_axis: Vector3::z(),
        }
    }
}

/// Drag coefficient curves, one per signed body axis, indexed by speed along that axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragCurveSet {
    /// +x
    pub right: ResponseCurve,
    /// -x
    pub left: ResponseCurve,
    /// +y
    pub top: ResponseCurve,
    /// -y
    pub bottom: ResponseCurve,
    /// +z
    pub forward: ResponseCurve,
    /// -z
    pub back: ResponseCurve,
}

impl DragCurveSet {
    /// Every direction uses the same constant coefficient.
    pub fn uniform(coefficient: f64) -> Self {
        let curve = ResponseCurve::constant(coefficient);
        Self {
            right: curve.clone(),
            left: curve.clone(),
            top: curve.clone(),
            bottom: curve.clone(),
            forward: curve.clone(),
            back: curve,
        }
    }
}

impl Default for DragCurveSet {
    fn default() -> Self {
        Self {
            right: ResponseCurve::preset(&[(0.0, 0.25), (150.0, 0.3)]),
            left: ResponseCurve::preset(&[(0.0, 0.25), (150.0, 0.3)]),
            top: ResponseCurve::preset(&[(0.0, 0.4), (150.0, 0.45)]),
            bottom: ResponseCurve::preset(&[(0.0, 0.5), (150.0, 0.55)]),
            forward: ResponseCurve::preset(&[(0.0, 0.02), (100.0, 0.02), (200.0, 0.04)]),
            back: ResponseCurve::preset(&[(0.0, 0.1), (150.0, 0.12)]),
        }
    }
}

/// Everything the force model needs to know about one airframe.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftAeroConfig {
    pub name: String,
    #[serde(default)]
    pub aero: AeroConfig,
    pub drag_curves: DragCurveSet,
    /// Wing lift coefficient by angle of attack [deg]
    pub lift_curve: ResponseCurve,
    /// Vertical stabiliser lift coefficient by yaw angle of attack [deg]
    pub rudder_curve: ResponseCurve,
}

impl Default for AircraftAeroConfig {
    fn default() -> Self {
        Self::trainer()
    }
}

impl AircraftAeroConfig {
    /// Light trainer: gentle stall past 15 degrees, flat belly, symmetric fin.
    pub fn trainer() -> Self {
        Self {
            name: "trainer".to_string(),
            aero: AeroConfig::default(),
            drag_curves: DragCurveSet::default(),
            lift_curve: ResponseCurve::preset(&[
                (-90.0, 0.0),
                (-20.0, -0.8),
                (-15.0, -1.1),
                (0.0, 0.2),
                (15.0, 1.4),
                (20.0, 1.0),
                (90.0, 0.0),
            ]),
            rudder_curve: ResponseCurve::preset(&[
                (-90.0, 0.0),
                (-15.0, -0.8),
                (0.0, 0.0),
                (15.0, 0.8),
                (90.0, 0.0),
            ]),
        }
    }

    /// Checks the scalar tuning. Curves validate themselves on construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let aero = &self.aero;
        let scalars = [
            ("throttle", aero.throttle),
            ("max_thrust", aero.max_thrust),
            ("airbrake_drag", aero.airbrake_drag),
            ("flaps_drag", aero.flaps_drag),
            ("flaps_lift_power", aero.flaps_lift_power),
            ("flaps_aoa_bias", aero.flaps_aoa_bias),
            ("induced_drag", aero.induced_drag),
            ("lift_power", aero.lift_power),
            ("rudder_power", aero.rudder_power),
        ];
        if let Some((field, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Validation(format!(
                "{}: {} must be finite, got {}",
                self.name, field, value
            )));
        }

        if aero.max_thrust < 0.0 {
            return Err(ConfigError::Validation(format!(
                "{}: max_thrust must be non-negative, got {}",
                self.name, aero.max_thrust
            )));
        }
        if aero.induced_drag < 0.0 {
            return Err(ConfigError::Validation(format!(
                "{}: induced_drag must be non-negative, got {}",
                self.name, aero.induced_drag
            )));
        }

        let axis = aero.forward_axis;
        if !axis.iter().all(|c| c.is_finite()) || axis.norm_squared() <= f64::EPSILON {
            return Err(ConfigError::Validation(format!(
                "{}: forward_axis must be a finite non-zero vector, got {:?}",
                self.name, axis
            )));
        }

        Ok(())
    }
}
