//! Time integrators advancing the particle state.
pub mod nve;
