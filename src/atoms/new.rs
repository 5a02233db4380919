use na::DMatrix;

use crate::errors::{MdError, Result};
use crate::random::RandomStream;
use crate::simulation_box::SimulationBox;

/// Column-per-particle state of the system.
///
/// Every array has shape `n_dims x n_atoms`, so particle `i` occupies the
/// contiguous slice `[i * n_dims, (i + 1) * n_dims)` of the column-major
/// storage. Mass is uniform across particles.
#[derive(Clone, Debug)]
pub struct Atoms {
    pub n_atoms: usize,
    pub n_dims: usize,
    pub positions: DMatrix<f64>,
    pub velocities: DMatrix<f64>,
    pub accelerations: DMatrix<f64>,
    pub forces: DMatrix<f64>,
    pub mass: f64,
}

impl Atoms {
    pub fn new_zeroes(n_dims: usize, n_atoms: usize, mass: f64) -> Result<Self> {
        if n_atoms < 1 {
            return Err(MdError::InvalidParticleCount {
                n_particles: n_atoms,
            });
        }
        if n_dims < 1 {
            return Err(MdError::InvalidDimension { n_dims });
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(MdError::InvalidMass { mass });
        }
        Ok(Self {
            n_atoms,
            n_dims,
            positions: DMatrix::zeros(n_dims, n_atoms),
            velocities: DMatrix::zeros(n_dims, n_atoms),
            accelerations: DMatrix::zeros(n_dims, n_atoms),
            forces: DMatrix::zeros(n_dims, n_atoms),
            mass,
        })
    }

    /// Places `n_atoms` particles uniformly in the box, at rest.
    pub fn in_box(
        sim_box: &SimulationBox,
        n_atoms: usize,
        mass: f64,
        stream: &mut RandomStream,
    ) -> Result<Self> {
        let mut this = Self::new_zeroes(sim_box.n_dims(), n_atoms, mass)?;
        this.positions = sim_box.sample_positions(n_atoms, stream);
        Ok(this)
    }

    /// Builds a system from explicit positions, with zero velocities.
    pub fn from_positions(positions: DMatrix<f64>, mass: f64) -> Result<Self> {
        let (n_dims, n_atoms) = positions.shape();
        let mut this = Self::new_zeroes(n_dims, n_atoms, mass)?;
        this.positions = positions;
        Ok(this)
    }

    /// Every array must be `n_dims x n_atoms` for the per-particle chunking to line up.
    pub fn check_shapes(&self) -> Result<()> {
        let expected = (self.n_dims, self.n_atoms);
        let arrays = [
            ("positions", &self.positions),
            ("velocities", &self.velocities),
            ("accelerations", &self.accelerations),
            ("forces", &self.forces),
        ];
        for (array, matrix) in arrays {
            if matrix.shape() != expected {
                return Err(MdError::ArrayShapeMismatch {
                    array,
                    expected,
                    found: matrix.shape(),
                });
            }
        }
        Ok(())
    }
}
