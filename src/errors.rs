use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdError {
    // input file
    #[error("cannot open run input '{path}': {source}")]
    InputFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: read failed: {source}")]
    DataFileError {
        path: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    // command parsing
    #[error("line {line}: '{command}' is not a known command")]
    UnknownCommand { command: String, line: usize },

    #[error("line {line}: command is missing a required value")]
    MissingArgument { line: usize },

    #[error("'{string}' is not a real number: {source}")]
    FloatParseError {
        string: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("'{string}' is not an integer: {source}")]
    IntParseError {
        string: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("line {line}: count must be non-negative, got {value}")]
    NegativeValue { value: i64, line: usize },

    #[error("line {line}: unsupported value '{string}'")]
    InvalidArgument { string: String, line: usize },

    // configuration
    #[error("particle count must be at least 1, got {n_particles}")]
    InvalidParticleCount { n_particles: usize },

    #[error("spatial dimension must be at least 1, got {n_dims}")]
    InvalidDimension { n_dims: usize },

    #[error("timestep must be positive and finite, got {dt}")]
    InvalidTimestep { dt: f64 },

    #[error("particle mass must be positive and finite, got {mass}")]
    InvalidMass { mass: f64 },

    #[error("box has {found} extents but the system is {expected}-dimensional")]
    BoxDimensionMismatch { expected: usize, found: usize },

    #[error("box extent {value} along dimension {dim} must be positive and finite")]
    InvalidBoxExtent { dim: usize, value: f64 },

    #[error("temperature must be non-negative and finite, got {temperature}")]
    InvalidTemperature { temperature: f64 },

    #[error("Park-Miller seed must be non-zero modulo 2147483647")]
    ZeroSeed,

    #[error("{array} has shape {found:?} but the system needs {expected:?} (dimensions x particles)")]
    ArrayShapeMismatch {
        array: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    // runtime
    #[error("cannot write energy reports: {source}")]
    OutputError {
        #[source]
        source: std::io::Error,
    },

    #[error("cannot start {threads} worker threads: {source}")]
    ThreadPool {
        threads: usize,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
}

pub type Result<T> = std::result::Result<T, MdError>;
