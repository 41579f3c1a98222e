use bevy::prelude::*;

use crate::components::{AeroForces, ControlInputs, FlightState, PhysicsComponent, SpatialComponent};
use crate::config::{AircraftAeroConfig, PhysicsConfig};
use crate::systems::{aero_force_system, flight_state_system};
use crate::utils::DEFAULT_TIMESTEP;

/// Per-tick ordering: measure the local frame first, then compute forces from it.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum AeroSet {
    FlightState,
    Forces,
}

/// Wires the flight-state estimator and force model into `FixedUpdate`.
///
/// The integrator is expected to run after [`AeroSet::Forces`] and read
/// [`PhysicsComponent`]; schedule it with `.after(AeroSet::Forces)`.
pub struct AerodynamicsPlugin {
    pub timestep: f64,
}

impl Default for AerodynamicsPlugin {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
        }
    }
}

impl Plugin for AerodynamicsPlugin {
    fn build(&self, app: &mut App) {
        info!("Building AerodynamicsPlugin at {:.1} Hz", 1.0 / self.timestep);

        app.insert_resource(PhysicsConfig {
            timestep: self.timestep,
        })
        .insert_resource(Time::<Fixed>::from_seconds(self.timestep));

        app.configure_sets(FixedUpdate, (AeroSet::FlightState, AeroSet::Forces).chain())
            .add_systems(
                FixedUpdate,
                (
                    flight_state_system.in_set(AeroSet::FlightState),
                    aero_force_system.in_set(AeroSet::Forces),
                ),
            );
    }
}

/// Spawns an aircraft with every component the aerodynamic systems read or write.
pub fn spawn_aircraft(
    commands: &mut Commands,
    config: AircraftAeroConfig,
    spatial: SpatialComponent,
) -> Entity {
    info!("Spawning aircraft '{}'", config.name);
    commands
        .spawn((
            Name::new(config.name.clone()),
            spatial,
            ControlInputs::default(),
            FlightState::starting_at(spatial.velocity),
            AeroForces::default(),
            PhysicsComponent::new(),
            config,
        ))
        .id()
}
