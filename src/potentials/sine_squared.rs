use crate::constants::SATURATION_DISTANCE;
use crate::potentials::potential::PairPotential;

/// `V(d) = sin^2(min(d, d_sat))`, split evenly between the two particles.
///
/// Beyond `d_sat` (pi/2 by default) the energy is flat at its maximum and the
/// force vanishes, since `sin(2 d_sat) = 0`.
#[derive(Clone, Copy, Debug)]
pub struct SineSquared {
    saturation: f64,
}

impl SineSquared {
    pub fn new(saturation: f64) -> Self {
        Self { saturation }
    }
}

impl Default for SineSquared {
    fn default() -> Self {
        Self::new(SATURATION_DISTANCE)
    }
}

impl PairPotential for SineSquared {
    fn evaluate(&self, distance: f64) -> (f64, f64) {
        // Coincident particles: take the d -> 0 limit, where sin(2d)/d * r -> 0.
        if distance == 0.0 {
            return (0.0, 0.0);
        }
        let clamped = distance.min(self.saturation);
        let half_energy = 0.5 * clamped.sin().powi(2);
        let radial = (2.0 * clamped).sin() / distance;
        (half_energy, radial)
    }
}
