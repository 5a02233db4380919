use rayon::prelude::*;

use crate::atoms::new::Atoms;
use crate::errors::{MdError, Result};
use crate::parallel::WorkerPool;

/// Velocity-Verlet in the microcanonical ensemble.
///
/// Expects `atoms.forces` to hold the forces of the current positions and
/// `atoms.accelerations` the accelerations from the previous step.
#[derive(Clone, Copy, Debug)]
pub struct VelocityVerlet {
    dt: f64,
}

impl VelocityVerlet {
    pub fn new(dt: f64) -> Result<Self> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(MdError::InvalidTimestep { dt });
        }
        Ok(Self { dt })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Per particle, in this order:
    /// `r += v dt + a dt^2 / 2`, `v += dt (f/m + a) / 2`, `a = f/m`.
    pub fn step(&self, atoms: &mut Atoms, pool: &WorkerPool) {
        let dt = self.dt;
        let rmass = 1.0 / atoms.mass;
        let n_dims = atoms.n_dims;
        let block = pool.block_len(atoms.n_atoms);
        let Atoms {
            positions,
            velocities,
            accelerations,
            forces,
            ..
        } = atoms;

        pool.install(|| {
            positions
                .as_mut_slice()
                .par_chunks_mut(n_dims)
                .zip(velocities.as_mut_slice().par_chunks_mut(n_dims))
                .zip(accelerations.as_mut_slice().par_chunks_mut(n_dims))
                .zip(forces.as_slice().par_chunks(n_dims))
                .with_min_len(block)
                .for_each(|(((r, v), a), f)| {
                    for d in 0..n_dims {
                        let a_new = f[d] * rmass;
                        r[d] += v[d] * dt + 0.5 * a[d] * dt * dt;
                        v[d] += 0.5 * dt * (a_new + a[d]);
                        a[d] = a_new;
                    }
                });
        });
    }
}
