use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Force sink read by the external integrator.
///
/// Producers push [`Force`]s during the tick; `net_force` is kept in step as the body-frame
/// sum of every body-frame force at the centre of mass.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub net_force: Vector3<f64>,
    pub forces: Vec<Force>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    /// Application point in the body frame, `None` for the centre of mass.
    pub point: Option<Vector3<f64>>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
    Custom(String),
}

impl Force {
    /// Body-frame force through the centre of mass.
    pub fn body(vector: Vector3<f64>, category: ForceCategory) -> Self {
        Self {
            vector,
            point: None,
            frame: ReferenceFrame::Body,
            category,
        }
    }
}

impl PhysicsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
        self.recompute_net_force();
    }

    /// Drops every force of `category`, leaving other producers' forces alone.
    pub fn clear_category(&mut self, category: &ForceCategory) {
        self.forces.retain(|f| &f.category != category);
        self.recompute_net_force();
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
        self.net_force = Vector3::zeros();
    }

    fn recompute_net_force(&mut self) {
        self.net_force = self
            .forces
            .iter()
            .filter(|f| f.frame == ReferenceFrame::Body && f.point.is_none())
            .fold(Vector3::zeros(), |acc, f| acc + f.vector);
    }
}
