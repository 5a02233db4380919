use std::path::PathBuf;

use clap::Parser;

use crate::constants::{
    DEFAULT_BOX_EXTENT, DEFAULT_DIMENSION, DEFAULT_MASS, DEFAULT_PARTICLES, DEFAULT_REPORTS,
    DEFAULT_SEED, DEFAULT_STEPS, DEFAULT_TIMESTEP,
};
use crate::errors::Result;
use crate::random::RngKind;
use crate::readers::input_file::read_input_file;
use crate::readers::simulation_context::{SimulationConfig, StartVelocity};

/// All-pairs molecular dynamics with velocity-Verlet integration.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Input file whose commands override the values given on the command line
    #[arg(short, long)]
    pub infile: Option<PathBuf>,

    /// Number of particles
    #[arg(short = 'n', long, default_value_t = DEFAULT_PARTICLES)]
    pub particles: usize,

    /// Spatial dimension
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    pub dimension: usize,

    /// Box extent, either one value for every axis or one per axis (comma separated)
    #[arg(long, value_delimiter = ',', num_args = 1.., default_values_t = [DEFAULT_BOX_EXTENT])]
    pub box_size: Vec<f64>,

    #[arg(long, default_value_t = DEFAULT_TIMESTEP)]
    pub timestep: f64,

    #[arg(long, default_value_t = DEFAULT_STEPS)]
    pub steps: usize,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Energy reports after the initial one
    #[arg(long, default_value_t = DEFAULT_REPORTS)]
    pub reports: usize,

    #[arg(long, default_value_t = DEFAULT_MASS)]
    pub mass: f64,

    /// Worker threads, 0 for one per core
    #[arg(short, long, default_value_t = 0)]
    pub threads: usize,

    #[arg(long, value_enum, default_value_t = RngKind::ParkMiller)]
    pub rng: RngKind,

    /// Start from a Maxwell-Boltzmann distribution at this temperature instead of rest
    #[arg(long)]
    pub temperature: Option<f64>,
}

impl Args {
    /// Command-line values first, then the input file on top.
    pub fn into_config(self) -> Result<SimulationConfig> {
        let mut config = SimulationConfig {
            n_particles: self.particles,
            n_dims: self.dimension,
            box_extents: self.box_size,
            timestep: self.timestep,
            steps: self.steps,
            seed: self.seed,
            reports: self.reports,
            mass: self.mass,
            threads: self.threads,
            rng: self.rng,
            starting_velocity: self.temperature.map(|temperature| StartVelocity {
                temperature,
                seed: None,
            }),
        };
        if let Some(path) = &self.infile {
            read_input_file(path, &mut config)?;
        }
        Ok(config)
    }
}
