use na::DVector;

use crate::constants::{
    DEFAULT_BOX_EXTENT, DEFAULT_DIMENSION, DEFAULT_MASS, DEFAULT_PARTICLES, DEFAULT_REPORTS,
    DEFAULT_SEED, DEFAULT_STEPS, DEFAULT_TIMESTEP,
};
use crate::errors::{MdError, Result};
use crate::random::RngKind;
use crate::simulation_box::SimulationBox;

/// Optional thermal start requested with `velocity create`.
#[derive(Clone, Debug, PartialEq)]
pub struct StartVelocity {
    pub temperature: f64,
    /// Falls back to the run seed when absent.
    pub seed: Option<u64>,
}

/// Everything needed to set up and run one simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub n_particles: usize,
    pub n_dims: usize,
    /// One value per dimension, or a single value applied to all of them.
    pub box_extents: Vec<f64>,
    pub timestep: f64,
    pub steps: usize,
    pub seed: u64,
    /// Number of energy reports after the initial one.
    pub reports: usize,
    pub mass: f64,
    /// Worker threads; `0` uses every available core.
    pub threads: usize,
    pub rng: RngKind,
    pub starting_velocity: Option<StartVelocity>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_particles: DEFAULT_PARTICLES,
            n_dims: DEFAULT_DIMENSION,
            box_extents: vec![DEFAULT_BOX_EXTENT],
            timestep: DEFAULT_TIMESTEP,
            steps: DEFAULT_STEPS,
            seed: DEFAULT_SEED,
            reports: DEFAULT_REPORTS,
            mass: DEFAULT_MASS,
            threads: 0,
            rng: RngKind::ParkMiller,
            starting_velocity: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n_particles < 1 {
            return Err(MdError::InvalidParticleCount {
                n_particles: self.n_particles,
            });
        }
        if self.n_dims < 1 {
            return Err(MdError::InvalidDimension {
                n_dims: self.n_dims,
            });
        }
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(MdError::InvalidTimestep { dt: self.timestep });
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(MdError::InvalidMass { mass: self.mass });
        }
        if let Some(start) = &self.starting_velocity {
            if !(start.temperature.is_finite() && start.temperature >= 0.0) {
                return Err(MdError::InvalidTemperature {
                    temperature: start.temperature,
                });
            }
        }
        self.sim_box()?;
        Ok(())
    }

    /// Expands `box_extents` to exactly `n_dims` values and checks them.
    pub fn sim_box(&self) -> Result<SimulationBox> {
        let extents = match self.box_extents.as_slice() {
            [single] => vec![*single; self.n_dims],
            many if many.len() == self.n_dims => many.to_vec(),
            many => {
                return Err(MdError::BoxDimensionMismatch {
                    expected: self.n_dims,
                    found: many.len(),
                })
            }
        };
        SimulationBox::new(DVector::from_vec(extents))
    }
}
