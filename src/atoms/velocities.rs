use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::atoms::new::Atoms;
use crate::constants::KB_REDUCED;
use crate::errors::{MdError, Result};

impl Atoms {
    /// Maxwell-Boltzmann start at `temperature`, with zero net momentum.
    pub fn start_velocities(&mut self, temperature: f64, seed: u64) -> Result<()> {
        if !(temperature.is_finite() && temperature >= 0.0) {
            return Err(MdError::InvalidTemperature { temperature });
        }
        if temperature == 0.0 {
            self.velocities.fill(0.0);
            return Ok(());
        }
        self.initialise_velocities(temperature, seed)?;
        self.remove_drift();
        self.rescale_to_temperature(temperature);
        Ok(())
    }

    fn initialise_velocities(&mut self, temperature: f64, seed: u64) -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let sigma = (KB_REDUCED * temperature / self.mass).sqrt();
        let normal =
            Normal::new(0.0, sigma).map_err(|_| MdError::InvalidTemperature { temperature })?;

        for v in self.velocities.iter_mut() {
            *v = normal.sample(&mut rng);
        }
        Ok(())
    }

    fn remove_drift(&mut self) {
        let velocity_cm = self.total_momentum() / (self.mass * self.n_atoms as f64);
        for mut column in self.velocities.column_iter_mut() {
            column -= &velocity_cm;
        }
    }

    fn rescale_to_temperature(&mut self, temperature: f64) {
        let kinetic_energy = self.kinetic_energy();
        let current_temperature = self.temperature(kinetic_energy);
        // a lone particle has no thermal motion left after drift removal
        if current_temperature > 0.0 {
            self.velocities *= (temperature / current_temperature).sqrt();
        }
    }
}
