use std::io::{Result, Write};
use std::time::Duration;

use crate::thermo::EnergyReport;

/// What the opening line of a run summarises.
#[derive(Clone, Copy, Debug)]
pub struct RunHeader {
    pub n_particles: usize,
    pub n_dims: usize,
    pub timestep: f64,
    pub steps: usize,
    pub threads: usize,
    pub processors: usize,
}

/// Plain-text energy log: header, one row per report, elapsed-time footer.
pub struct ThermoLog<W: Write> {
    out: W,
}

impl<W: Write> ThermoLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_header(&mut self, header: &RunHeader) -> Result<()> {
        writeln!(
            self.out,
            "particles {} dimensions {} timestep {} steps {} threads {} processors {}",
            header.n_particles,
            header.n_dims,
            header.timestep,
            header.steps,
            header.threads,
            header.processors
        )?;
        writeln!(
            self.out,
            "{:>8} {:>16} {:>16} {:>16}",
            "step", "potential", "kinetic", "rel_drift"
        )?;
        Ok(())
    }

    pub fn write_report(&mut self, report: &EnergyReport) -> Result<()> {
        let drift = match report.drift {
            Some(drift) => format!("{:16.8e}", drift),
            None => format!("{:>16}", "n/a"),
        };
        writeln!(
            self.out,
            "{:8} {:16.8e} {:16.8e} {}",
            report.step, report.potential, report.kinetic, drift
        )
    }

    pub fn write_footer(&mut self, elapsed: Duration) -> Result<()> {
        writeln!(self.out, "elapsed wall clock seconds {:.6}", elapsed.as_secs_f64())?;
        self.out.flush()
    }
}
