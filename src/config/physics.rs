use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_TIMESTEP;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed tick length handed to the flight-state estimator [s]
    pub timestep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
        }
    }
}
