use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::DMatrix;

use verlet_md::atoms::new::Atoms;
use verlet_md::parallel::WorkerPool;
use verlet_md::potentials::potential::{AllPairsManager, PotentialManager};
use verlet_md::potentials::sine_squared::SineSquared;
use verlet_md::random::{RandomStream, RngKind};
use verlet_md::readers::simulation_context::SimulationConfig;
use verlet_md::simulation_box::SimulationBox;
use verlet_md::system::{RunSummary, System};
use verlet_md::writers::thermo_log::ThermoLog;

fn run(config: SimulationConfig) -> RunSummary {
    System::new(config)
        .unwrap()
        .run(&mut ThermoLog::new(std::io::sink()))
        .unwrap()
}

/// Straightforward double loop over ordered pairs, used as the reference.
fn naive_potential(positions: &DMatrix<f64>) -> f64 {
    let n = positions.ncols();
    let mut potential = 0.0;
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let d = (positions.column(i) - positions.column(j)).norm();
            let clamped = d.min(std::f64::consts::FRAC_PI_2);
            potential += 0.5 * clamped.sin().powi(2);
        }
    }
    potential
}

fn random_atoms(n_dims: usize, n_atoms: usize, extent: f64, seed: u64) -> Atoms {
    let sim_box = SimulationBox::cubic(n_dims, extent).unwrap();
    let mut stream = RandomStream::new(RngKind::ParkMiller, seed).unwrap();
    Atoms::in_box(&sim_box, n_atoms, 1.0, &mut stream).unwrap()
}

#[test]
fn energy_is_conserved_over_a_short_run() {
    let summary = run(SimulationConfig {
        n_particles: 50,
        n_dims: 3,
        box_extents: vec![3.0],
        timestep: 0.001,
        steps: 50,
        reports: 5,
        threads: 4,
        ..Default::default()
    });
    assert_eq!(summary.reports.len(), 6);
    for report in &summary.reports {
        let drift = report.drift.expect("non-zero initial energy");
        assert!(drift.abs() < 1e-2, "step {} drift {}", report.step, drift);
    }
    // particles started at rest and have been pulled together
    assert!(summary.final_report().unwrap().kinetic > 0.0);
}

#[test]
fn same_seed_gives_the_same_trajectory() {
    let config = SimulationConfig {
        n_particles: 40,
        n_dims: 2,
        box_extents: vec![2.0, 3.0],
        timestep: 0.001,
        steps: 20,
        reports: 4,
        threads: 3,
        seed: 2024,
        ..Default::default()
    };
    let a = run(config.clone());
    let b = run(config);
    assert_eq!(a.atoms.positions, b.atoms.positions);
    assert_eq!(a.atoms.velocities, b.atoms.velocities);
    for (ra, rb) in a.reports.iter().zip(&b.reports) {
        assert_eq!(ra.step, rb.step);
        assert_relative_eq!(ra.potential, rb.potential, max_relative = 1e-12);
        assert_relative_eq!(ra.kinetic, rb.kinetic, max_relative = 1e-12);
    }
}

#[test]
fn small_rng_is_reproducible_too() {
    let config = SimulationConfig {
        n_particles: 10,
        steps: 0,
        rng: RngKind::Small,
        seed: 5,
        threads: 1,
        ..Default::default()
    };
    let a = System::new(config.clone()).unwrap();
    let b = System::new(config).unwrap();
    assert_eq!(a.atoms().positions, b.atoms().positions);
}

#[test]
fn thread_count_does_not_change_the_physics() {
    let mgr = AllPairsManager::new(SineSquared::default());
    let mut serial = random_atoms(3, 300, 4.0, 99);
    serial.velocities.fill(0.25);
    let mut parallel = serial.clone();

    let one = WorkerPool::new(1).unwrap();
    let many = WorkerPool::new(6).unwrap();
    let e_serial = mgr.compute_forces(&mut serial, &one);
    let e_parallel = mgr.compute_forces(&mut parallel, &many);

    assert_relative_eq!(e_serial.potential, e_parallel.potential, max_relative = 1e-9);
    assert_relative_eq!(e_serial.kinetic, e_parallel.kinetic, max_relative = 1e-9);
    // each particle's force is summed in the same order whatever the split
    assert_eq!(serial.forces, parallel.forces);
}

#[test]
fn serial_and_parallel_runs_agree() {
    let config = SimulationConfig {
        n_particles: 64,
        box_extents: vec![3.0],
        timestep: 0.001,
        steps: 25,
        reports: 5,
        threads: 1,
        ..Default::default()
    };
    let serial = run(config.clone());
    let parallel = run(SimulationConfig {
        threads: 4,
        ..config
    });
    assert_eq!(serial.threads, 1);
    assert_eq!(parallel.threads, 4);
    assert_eq!(serial.atoms.positions, parallel.atoms.positions);
    for (s, p) in serial.reports.iter().zip(&parallel.reports) {
        assert_relative_eq!(s.total(), p.total(), max_relative = 1e-9);
    }
}

#[test]
fn lone_moving_particle() {
    let mut atoms = Atoms::new_zeroes(3, 1, 2.0).unwrap();
    atoms.velocities = DMatrix::from_column_slice(3, 1, &[0.5, -1.0, 2.0]);
    let config = SimulationConfig {
        box_extents: vec![1.0],
        timestep: 0.1,
        steps: 10,
        reports: 2,
        threads: 2,
        ..Default::default()
    };
    let summary = System::with_atoms(config, atoms)
        .unwrap()
        .run(&mut ThermoLog::new(std::io::sink()))
        .unwrap();
    let expected_kinetic = 0.5 * 2.0 * (0.25 + 1.0 + 4.0);
    for report in &summary.reports {
        assert_eq!(report.potential, 0.0);
        assert_relative_eq!(report.kinetic, expected_kinetic, max_relative = 1e-12);
        assert_abs_diff_eq!(report.drift.unwrap(), 0.0, epsilon = 1e-12);
    }
    // no boundary handling: the particle leaves the unit box
    assert_relative_eq!(summary.atoms.positions[(2, 0)], 2.0, max_relative = 1e-12);
}

#[test]
fn reference_scenario_end_to_end() {
    let config = SimulationConfig {
        n_particles: 100,
        n_dims: 3,
        box_extents: vec![10.0, 10.0, 10.0],
        seed: 123_456_789,
        timestep: 0.0001,
        steps: 400,
        reports: 10,
        threads: 4,
        ..Default::default()
    };
    let system = System::new(config).unwrap();
    let initial_positions = system.atoms().positions.clone();
    let mut log = ThermoLog::new(Vec::new());
    let summary = system.run(&mut log).unwrap();

    let steps: Vec<usize> = summary.reports.iter().map(|r| r.step).collect();
    assert_eq!(steps, (0..=10).map(|k| k * 40).collect::<Vec<_>>());

    let first = &summary.reports[0];
    assert_relative_eq!(
        first.potential,
        naive_potential(&initial_positions),
        max_relative = 1e-12
    );
    assert_eq!(first.kinetic, 0.0);

    let last = summary.final_report().unwrap();
    assert!(last.drift.unwrap().abs() < 1e-2);

    let text = String::from_utf8(log.into_inner()).unwrap();
    assert!(text.starts_with("particles 100 dimensions 3 timestep 0.0001 steps 400 threads 4"));
    assert!(text.lines().last().unwrap().starts_with("elapsed wall clock seconds"));
}
