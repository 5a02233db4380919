//! Reader for line-oriented input files, one command per line.
pub mod commands;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::errors::{MdError, Result};
use crate::readers::input_file::commands::Command;
use crate::readers::simulation_context::SimulationConfig;

/// Reads the input file at `path` and applies every command to `ctx`.
pub fn read_input_file(path: &Path, ctx: &mut SimulationConfig) -> Result<()> {
    let file = File::open(path).map_err(|e| MdError::InputFileError {
        path: path.display().to_string(),
        source: e,
    })?;
    apply_commands(BufReader::new(file), &path.display().to_string(), ctx)
}

/// Applies the commands read from `reader`; `path` is only used in error messages.
pub fn apply_commands<R: BufRead>(reader: R, path: &str, ctx: &mut SimulationConfig) -> Result<()> {
    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line.map_err(|e| MdError::DataFileError {
            path: path.to_string(),
            line: line_num,
            source: e,
        })?;
        // Considering only the part of the line that is before the commented part.
        let uncommented = line
            .split_once('#')
            .map(|(before, _)| before)
            .unwrap_or(line.as_str())
            .trim();

        if uncommented.is_empty() {
            continue;
        }

        let line_split: Vec<&str> = uncommented.split_whitespace().collect();
        let command = line_split[0];
        let args = &line_split[1..];

        match Command::from_str(command) {
            Some(cmd) => cmd.run(args, line_num, ctx)?,
            None => {
                return Err(MdError::UnknownCommand {
                    command: command.to_string(),
                    line: line_num,
                })
            }
        }
    }
    log::debug!("applied input commands from {}", path);
    Ok(())
}
