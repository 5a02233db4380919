use na::{DMatrix, DVector};

use crate::errors::{MdError, Result};
use crate::random::RandomStream;

/// Axis-aligned box `[0, L_d)` used only to place particles at start-up.
///
/// No wrapping or reflection is applied while integrating, so particles are
/// free to leave the box afterwards.
#[derive(Clone, Debug)]
pub struct SimulationBox {
    pub extents: DVector<f64>,
}

impl SimulationBox {
    pub fn new(extents: DVector<f64>) -> Result<Self> {
        for (dim, &value) in extents.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(MdError::InvalidBoxExtent { dim, value });
            }
        }
        Ok(Self { extents })
    }

    pub fn cubic(n_dims: usize, extent: f64) -> Result<Self> {
        Self::new(DVector::from_element(n_dims, extent))
    }

    pub fn n_dims(&self) -> usize {
        self.extents.len()
    }

    /// Draws `n_particles` columns, particle by particle and dimension by dimension.
    pub fn sample_positions(&self, n_particles: usize, stream: &mut RandomStream) -> DMatrix<f64> {
        let n_dims = self.n_dims();
        let mut positions = DMatrix::zeros(n_dims, n_particles);
        for i in 0..n_particles {
            for d in 0..n_dims {
                positions[(d, i)] = self.extents[d] * stream.next_unit();
            }
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngKind;
    use approx::assert_relative_eq;

    fn inside(sim_box: &SimulationBox, point: &[f64]) -> bool {
        point
            .iter()
            .zip(sim_box.extents.iter())
            .all(|(&x, &l)| (0.0..l).contains(&x))
    }

    #[test]
    fn sampled_positions_lie_in_box() {
        let sim_box = SimulationBox::new(DVector::from_vec(vec![10.0, 2.0, 0.5])).unwrap();
        let mut stream = RandomStream::new(RngKind::ParkMiller, 7).unwrap();
        let positions = sim_box.sample_positions(200, &mut stream);
        assert_eq!(positions.shape(), (3, 200));
        for column in positions.column_iter() {
            assert!(inside(&sim_box, column.as_slice()));
        }
    }

    #[test]
    fn first_particle_uses_first_draws_in_dimension_order() {
        let sim_box = SimulationBox::cubic(3, 10.0).unwrap();
        let mut stream = RandomStream::new(RngKind::ParkMiller, 123_456_789).unwrap();
        let positions = sim_box.sample_positions(2, &mut stream);
        assert_relative_eq!(positions[(0, 0)], 2.184_182_969_823_758, max_relative = 1e-14);
        assert_relative_eq!(positions[(1, 0)], 9.563_175_765_089_297, max_relative = 1e-14);
        assert_relative_eq!(positions[(2, 0)], 8.295_092_339_327_006, max_relative = 1e-14);
        assert_relative_eq!(positions[(0, 1)], 5.616_954_427_668_942, max_relative = 1e-14);
    }

    #[test]
    fn non_positive_extent_is_rejected() {
        let err = SimulationBox::new(DVector::from_vec(vec![1.0, 0.0])).unwrap_err();
        assert!(matches!(err, MdError::InvalidBoxExtent { dim: 1, .. }));
        assert!(SimulationBox::cubic(2, f64::NAN).is_err());
    }
}
