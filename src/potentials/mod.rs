//! Pair potentials and the managers that turn them into forces and energies.
pub mod potential;
pub mod sine_squared;
