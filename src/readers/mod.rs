//! Run configuration and the input-file reader that fills it.
pub mod input_file;
pub mod simulation_context;
