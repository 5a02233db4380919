//! The driver that sets up and runs one simulation.
use std::io::Write;
use std::time::{Duration, Instant};

use crate::{
    atoms::new::Atoms,
    ensemble::nve::VelocityVerlet,
    errors::{MdError, Result},
    parallel::{available_processors, WorkerPool},
    potentials::{
        potential::{AllPairsManager, PotentialManager},
        sine_squared::SineSquared,
    },
    random::RandomStream,
    readers::simulation_context::SimulationConfig,
    thermo::{EnergyReport, ReportSchedule},
    writers::thermo_log::{RunHeader, ThermoLog},
};

/// [`System`] is the basic API for running the molecular dynamics simulation.
///
/// [`System::new`] validates the configuration, builds the worker pool and
/// places the particles. [`System::run`] consumes the system, advances it the
/// configured number of steps and hands back a [`RunSummary`].
///
/// # Examples
///
/// ```no_run
/// use verlet_md::readers::simulation_context::SimulationConfig;
/// use verlet_md::system::System;
/// use verlet_md::writers::thermo_log::ThermoLog;
///
/// let system = System::new(SimulationConfig::default()).unwrap();
/// let summary = system.run(&mut ThermoLog::new(std::io::stdout())).unwrap();
/// println!("{} reports", summary.reports.len());
/// ```
pub struct System {
    config: SimulationConfig,
    atoms: Atoms,
    pool: WorkerPool,
    mgr: Box<dyn PotentialManager>,
    integrator: VelocityVerlet,
}

/// What a finished run leaves behind.
#[derive(Debug)]
pub struct RunSummary {
    pub reports: Vec<EnergyReport>,
    /// `E0`, the baseline for the relative drift.
    pub initial_energy: f64,
    pub elapsed: Duration,
    pub threads: usize,
    pub atoms: Atoms,
}

impl RunSummary {
    pub fn final_report(&self) -> Option<&EnergyReport> {
        self.reports.last()
    }
}

impl System {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let sim_box = config.sim_box()?;
        let mut stream = RandomStream::new(config.rng, config.seed)?;
        let mut atoms = Atoms::in_box(&sim_box, config.n_particles, config.mass, &mut stream)?;

        if let Some(start) = &config.starting_velocity {
            atoms.start_velocities(start.temperature, start.seed.unwrap_or(config.seed))?;
        }

        Self::with_atoms(config, atoms)
    }

    /// Runs from a prepared state; particle count, dimension and mass are taken from `atoms`.
    pub fn with_atoms(mut config: SimulationConfig, atoms: Atoms) -> Result<Self> {
        config.n_particles = atoms.n_atoms;
        config.n_dims = atoms.n_dims;
        config.mass = atoms.mass;
        config.validate()?;
        atoms.check_shapes()?;

        let pool = WorkerPool::new(config.threads)?;
        let integrator = VelocityVerlet::new(config.timestep)?;
        log::debug!("{:?}", config);

        Ok(Self {
            config,
            atoms,
            pool,
            mgr: Box::new(AllPairsManager::new(SineSquared::default())),
            integrator,
        })
    }

    pub fn atoms(&self) -> &Atoms {
        &self.atoms
    }

    /// Step 0 evaluates and reports the initial state. Every step `1..=steps`
    /// then evaluates forces, reports if scheduled, and integrates.
    pub fn run<W: Write>(mut self, log: &mut ThermoLog<W>) -> Result<RunSummary> {
        let start = Instant::now();
        let steps = self.config.steps;
        log::info!(
            "run started: {} particles in {} dimensions, {} steps on {} threads",
            self.atoms.n_atoms,
            self.atoms.n_dims,
            steps,
            self.pool.threads()
        );

        log.write_header(&RunHeader {
            n_particles: self.atoms.n_atoms,
            n_dims: self.atoms.n_dims,
            timestep: self.integrator.dt(),
            steps,
            threads: self.pool.threads(),
            processors: available_processors(),
        })
        .map_err(|source| MdError::OutputError { source })?;

        let energies = self.mgr.compute_forces(&mut self.atoms, &self.pool);
        let initial_energy = energies.total();
        let mut schedule = ReportSchedule::new(steps, self.config.reports);
        let mut reports = Vec::with_capacity(schedule.targets().len() + 1);
        self.record(EnergyReport::new(0, energies, initial_energy), log, &mut reports)?;

        for step in 1..=steps {
            let energies = self.mgr.compute_forces(&mut self.atoms, &self.pool);
            if schedule.is_due(step) {
                self.record(EnergyReport::new(step, energies, initial_energy), log, &mut reports)?;
            }
            self.integrator.step(&mut self.atoms, &self.pool);
        }

        let elapsed = start.elapsed();
        log.write_footer(elapsed)
            .map_err(|source| MdError::OutputError { source })?;
        log::info!("run finished in {:.3} s", elapsed.as_secs_f64());

        Ok(RunSummary {
            reports,
            initial_energy,
            elapsed,
            threads: self.pool.threads(),
            atoms: self.atoms,
        })
    }

    fn record<W: Write>(
        &self,
        report: EnergyReport,
        log: &mut ThermoLog<W>,
        reports: &mut Vec<EnergyReport>,
    ) -> Result<()> {
        log::debug!("step {} total energy {:e}", report.step, report.total());
        log.write_report(&report)
            .map_err(|source| MdError::OutputError { source })?;
        reports.push(report);
        Ok(())
    }
}
