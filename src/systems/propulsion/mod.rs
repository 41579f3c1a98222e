mod thrust;

pub use thrust::calculate_thrust_force;
