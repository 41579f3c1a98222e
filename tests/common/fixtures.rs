use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use plane_aero::{
    components::{AeroForces, ControlInputs, FlightState, PhysicsComponent, SpatialComponent},
    config::{AircraftAeroConfig, DragCurveSet, PhysicsConfig},
    systems::{aero_force_system, flight_state_system},
    ResponseCurve,
};

pub const TIMESTEP: f64 = 1.0 / 120.0;

/// Config with flat curves so expected forces can be worked out by hand
pub fn constant_config(drag: f64, lift: f64) -> AircraftAeroConfig {
    let mut config = AircraftAeroConfig::trainer();
    config.name = "constant".to_string();
    config.drag_curves = DragCurveSet::uniform(drag);
    config.lift_curve = ResponseCurve::constant(lift);
    config.rudder_curve = ResponseCurve::constant(0.0);
    config.aero.throttle = 1.0;
    config.aero.max_thrust = 50.0;
    config.aero.lift_power = 1.0;
    config.aero.induced_drag = 0.0;
    config
}

pub fn level_flight(speed: f64) -> SpatialComponent {
    SpatialComponent::moving(Vector3::new(0.0, 0.0, speed), UnitQuaternion::identity())
}

/// Headless app running the aerodynamic systems once per `update`
pub fn test_app() -> App {
    let mut app = App::new();
    app.insert_resource(PhysicsConfig { timestep: TIMESTEP });
    app.add_systems(Update, (flight_state_system, aero_force_system).chain());
    app
}

pub fn spawn_test_aircraft(
    app: &mut App,
    config: AircraftAeroConfig,
    spatial: SpatialComponent,
    controls: ControlInputs,
) -> Entity {
    app.world_mut()
        .spawn((
            spatial,
            controls,
            FlightState::starting_at(spatial.velocity),
            AeroForces::default(),
            PhysicsComponent::new(),
            config,
        ))
        .id()
}
