//! The particle arrays that make up the simulated system can be found here.
pub mod new;
pub mod properties;
pub mod velocities;
