/// Separation beyond which the sine-squared pair potential saturates.
pub const SATURATION_DISTANCE: f64 = std::f64::consts::FRAC_PI_2;

/// Boltzmann constant in reduced units.
pub const KB_REDUCED: f64 = 1.0;

// Lehmer "minimal standard" generator parameters
pub const PARK_MILLER_MODULUS: i64 = 2_147_483_647;
pub const PARK_MILLER_MULTIPLIER: i64 = 16_807;
pub const PARK_MILLER_QUOTIENT: i64 = 127_773;
pub const PARK_MILLER_REMAINDER: i64 = 2_836;
pub const PARK_MILLER_SCALE: f64 = 4.656612875e-10;

pub const DEFAULT_PARTICLES: usize = 1000;
pub const DEFAULT_DIMENSION: usize = 3;
pub const DEFAULT_BOX_EXTENT: f64 = 10.0;
pub const DEFAULT_TIMESTEP: f64 = 0.0001;
pub const DEFAULT_STEPS: usize = 400;
pub const DEFAULT_SEED: u64 = 123_456_789;
pub const DEFAULT_REPORTS: usize = 10;
pub const DEFAULT_MASS: f64 = 1.0;
