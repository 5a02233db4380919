use na::DVector;

use crate::atoms::new::Atoms;
use crate::constants::KB_REDUCED;

impl Atoms {
    pub fn kinetic_energy(&self) -> f64 {
        let mut ek: f64 = 0.0;
        for velocity in self.velocities.column_iter() {
            ek += 0.5 * self.mass * velocity.norm_squared();
        }
        ek
    }

    /// Instantaneous temperature `2K / (D N kB)` in reduced units.
    pub fn temperature(&self, kinetic_energy: f64) -> f64 {
        (2.0 * kinetic_energy) / ((self.n_dims * self.n_atoms) as f64 * KB_REDUCED)
    }

    pub fn total_momentum(&self) -> DVector<f64> {
        self.velocities.column_sum() * self.mass
    }
}

#[cfg(test)]
mod tests {
    use crate::atoms::new::Atoms;
    use approx::assert_relative_eq;
    use na::DMatrix;

    #[test]
    fn kinetic_energy_single_particle() {
        let mut atoms = Atoms::new_zeroes(3, 1, 2.0).unwrap();
        atoms.velocities = DMatrix::from_column_slice(3, 1, &[1.0, -2.0, 0.5]);
        assert_relative_eq!(atoms.kinetic_energy(), 0.5 * 2.0 * 5.25);
    }

    #[test]
    fn momentum_sums_columns() {
        let mut atoms = Atoms::new_zeroes(2, 2, 4.0).unwrap();
        atoms.velocities = DMatrix::from_column_slice(2, 2, &[1.0, 2.0, -0.5, 0.0]);
        assert_eq!(atoms.total_momentum().as_slice(), &[2.0, 8.0]);
    }
}
