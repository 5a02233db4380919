//! Molecular dynamics of particles interacting through a saturating
//! sine-squared pair potential.
//!
//! Forces are summed over all pairs and the state is advanced with
//! velocity-Verlet. Both the force evaluation and the integration are
//! data-parallel over particles on a fixed-size worker pool.
extern crate nalgebra as na;

pub mod args_parser;
pub mod atoms;
pub mod constants;
pub mod ensemble;
pub mod errors;
pub mod extensions;
pub mod math;
pub mod parallel;
pub mod potentials;
pub mod random;
pub mod readers;
pub mod simulation_box;
pub mod system;
pub mod thermo;
pub mod writers;
