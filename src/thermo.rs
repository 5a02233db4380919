//! Energy reports and the steps at which they are taken.
use crate::potentials::potential::Energies;

/// Energies at one reported step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyReport {
    pub step: usize,
    pub potential: f64,
    pub kinetic: f64,
    /// `(E - E0) / E0`, absent when the initial energy is zero.
    pub drift: Option<f64>,
}

impl EnergyReport {
    pub fn new(step: usize, energies: Energies, initial_energy: f64) -> Self {
        Self {
            step,
            potential: energies.potential,
            kinetic: energies.kinetic,
            drift: relative_drift(energies.total(), initial_energy),
        }
    }

    pub fn total(&self) -> f64 {
        self.potential + self.kinetic
    }
}

pub fn relative_drift(energy: f64, initial_energy: f64) -> Option<f64> {
    if initial_energy == 0.0 {
        None
    } else {
        Some((energy - initial_energy) / initial_energy)
    }
}

/// Steps `k * steps / reports` for `k = 1..=reports`, deduplicated.
///
/// Step 0 is always reported separately. With more reports than steps the
/// integer division repeats targets, which are collapsed here.
#[derive(Clone, Debug)]
pub struct ReportSchedule {
    targets: Vec<usize>,
    next: usize,
}

impl ReportSchedule {
    pub fn new(steps: usize, reports: usize) -> Self {
        // with reports >= steps every step 1..=steps is already a target
        let reports = reports.min(steps);
        let mut targets: Vec<usize> = (1..=reports)
            .map(|k| (k as u128 * steps as u128 / reports as u128) as usize)
            .filter(|&step| step >= 1)
            .collect();
        targets.dedup();
        Self { targets, next: 0 }
    }

    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Whether `step` is scheduled. Steps must be visited in increasing order.
    pub fn is_due(&mut self, step: usize) -> bool {
        while self.targets.get(self.next).is_some_and(|&t| t < step) {
            self.next += 1;
        }
        if self.targets.get(self.next) == Some(&step) {
            self.next += 1;
            true
        } else {
            false
        }
    }
}
