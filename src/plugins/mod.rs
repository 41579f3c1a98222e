pub mod aerodynamics;

pub use aerodynamics::{spawn_aircraft, AeroSet, AerodynamicsPlugin};
