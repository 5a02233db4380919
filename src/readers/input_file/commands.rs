//! Parsers for the individual commands of an input file.
use crate::errors::{MdError, Result};
use crate::extensions::ArgsExt;
use crate::random::RngKind;
use crate::readers::simulation_context::{SimulationConfig, StartVelocity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Particles,
    Dimension,
    Box,
    TimeStep,
    Run,
    Seed,
    Thermo,
    Mass,
    Threads,
    Rng,
    Velocity,
}

impl Command {
    pub fn from_str(name: &str) -> Option<Self> {
        match name {
            "particles" => Some(Self::Particles),
            "dimension" => Some(Self::Dimension),
            "box" => Some(Self::Box),
            "timestep" => Some(Self::TimeStep),
            "run" => Some(Self::Run),
            "seed" => Some(Self::Seed),
            "thermo" => Some(Self::Thermo),
            "mass" => Some(Self::Mass),
            "threads" => Some(Self::Threads),
            "rng" => Some(Self::Rng),
            "velocity" => Some(Self::Velocity),
            _ => None,
        }
    }

    pub fn run(&self, args: &[&str], line: usize, ctx: &mut SimulationConfig) -> Result<()> {
        match self {
            Self::Particles => ctx.n_particles = args.parse_count_at(0, line)?,
            Self::Dimension => ctx.n_dims = args.parse_count_at(0, line)?,
            Self::Box => ctx.box_extents = args.parse_floats_from(0, line)?,
            Self::TimeStep => ctx.timestep = args.parse_float_at(0, line)?,
            Self::Run => ctx.steps = args.parse_count_at(0, line)?,
            Self::Seed => ctx.seed = args.parse_count_at(0, line)? as u64,
            Self::Thermo => ctx.reports = args.parse_count_at(0, line)?,
            Self::Mass => ctx.mass = args.parse_float_at(0, line)?,
            Self::Threads => ctx.threads = args.parse_count_at(0, line)?,
            Self::Rng => {
                let name = args.get_required(0, line)?;
                ctx.rng = RngKind::from_str(name).ok_or_else(|| MdError::InvalidArgument {
                    string: name.to_string(),
                    line,
                })?;
            }
            Self::Velocity => ctx.starting_velocity = Some(parse_velocity(args, line)?),
        }
        Ok(())
    }
}

/// `velocity create TEMPERATURE [SEED]`; `create` is the only style.
fn parse_velocity(args: &[&str], line: usize) -> Result<StartVelocity> {
    let mut read_args = 0;
    let style = args.get_required(read_args, line)?;
    read_args += 1;
    if style != "create" {
        return Err(MdError::InvalidArgument {
            string: style.to_string(),
            line,
        });
    }
    let temperature = args.parse_float_at(read_args, line)?;
    read_args += 1;
    let seed = match args.get(read_args) {
        Some(_) => Some(args.parse_count_at(read_args, line)? as u64),
        None => None,
    };
    Ok(StartVelocity { temperature, seed })
}
