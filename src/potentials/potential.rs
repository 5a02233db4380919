use std::ops::{Add, AddAssign};

use rayon::prelude::*;

use crate::atoms::new::Atoms;
use crate::math::{displacement_into, norm_squared};
use crate::parallel::WorkerPool;

/// A central pair interaction depending only on the separation `d`.
pub trait PairPotential: Send + Sync {
    /// Returns `(u, g)` where `u` is the energy credited to one side of the pair
    /// and `g` is the radial factor such that the force on particle `i` from `j`
    /// is `-g * (r_i - r_j)`.
    fn evaluate(&self, distance: f64) -> (f64, f64);
}

/// Potential and kinetic energy of the whole system, summed over particles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Energies {
    pub potential: f64,
    pub kinetic: f64,
}

impl Energies {
    pub fn total(&self) -> f64 {
        self.potential + self.kinetic
    }
}

impl Add for Energies {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            potential: self.potential + rhs.potential,
            kinetic: self.kinetic + rhs.kinetic,
        }
    }
}

impl AddAssign for Energies {
    fn add_assign(&mut self, rhs: Self) {
        self.potential += rhs.potential;
        self.kinetic += rhs.kinetic;
    }
}

pub trait PotentialManager: Send + Sync {
    /// Overwrites `atoms.forces` and returns the system energies for the current state.
    fn compute_forces(&self, atoms: &mut Atoms, pool: &WorkerPool) -> Energies;
}

/// O(N^2) evaluation over every ordered pair `(i, j)`, `i != j`.
///
/// Work is split over the outer index `i`: each task owns the force slots of
/// its particle range and only reads positions, so no slot is written twice.
/// Potential and kinetic energy are combined with a sum reduction.
pub struct AllPairsManager<P: PairPotential> {
    pub potential: P,
}

impl<P: PairPotential> AllPairsManager<P> {
    pub fn new(potential: P) -> Self {
        Self { potential }
    }
}

impl<P: PairPotential> PotentialManager for AllPairsManager<P> {
    fn compute_forces(&self, atoms: &mut Atoms, pool: &WorkerPool) -> Energies {
        let n_dims = atoms.n_dims;
        let mass = atoms.mass;
        let block = pool.block_len(atoms.n_atoms);
        let positions = atoms.positions.as_slice();
        let velocities = atoms.velocities.as_slice();
        let forces = atoms.forces.as_mut_slice();
        let potential = &self.potential;

        pool.install(|| {
            forces
                .par_chunks_mut(n_dims)
                .zip(positions.par_chunks(n_dims))
                .zip(velocities.par_chunks(n_dims))
                .enumerate()
                .with_min_len(block)
                .map_init(
                    || vec![0.0; n_dims],
                    |rij, (i, ((f_i, r_i), v_i))| {
                        let mut u_i = 0.0;
                        f_i.fill(0.0);
                        for (j, r_j) in positions.chunks_exact(n_dims).enumerate() {
                            if i == j {
                                continue;
                            }
                            let d = displacement_into(r_i, r_j, rij);
                            let (u, g) = potential.evaluate(d);
                            u_i += u;
                            for (f, x) in f_i.iter_mut().zip(rij.iter()) {
                                *f -= x * g;
                            }
                        }
                        Energies {
                            potential: u_i,
                            kinetic: 0.5 * mass * norm_squared(v_i),
                        }
                    },
                )
                .reduce(Energies::default, |a, b| a + b)
        })
    }
}
