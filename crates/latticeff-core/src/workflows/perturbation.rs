use super::config::PerturbationConfig;
use super::error::WorkflowError;
use crate::core::forcefield::params::InteractionParams;
use crate::core::forcefield::scoring::Scorer;
use crate::core::forcefield::term::EnergyTerm;
use crate::core::models::system::LatticeSystem;
use tracing::{debug, info, instrument};

/// Outcome of the perturbation analysis on a lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerturbationReport {
    /// Energy of the uncharged lattice.
    pub baseline: EnergyTerm,
    /// Van der Waals interaction of the central particle with all others.
    pub central_vdw: f64,
    /// Baseline van der Waals energy with the central particle left out.
    pub vdw_without_central: f64,
    /// Energy with every particle carrying the probe charge.
    pub charged: EnergyTerm,
    /// Electrostatic interaction of the central particle with all others, all charged.
    pub central_elec: f64,
    /// Electrostatic energy once the central particle's charge changes sign.
    pub inverted_central_elec: f64,
    /// Uniform charge magnitude at which electrostatics cancel the van der Waals energy.
    pub equilibrating_charge: f64,
    /// Charge magnitude that balances the van der Waals energy when the central
    /// particle carries the opposite sign of all the others.
    pub compensating_charge: f64,
}

/// Builds the cubic lattice described by `config` and analyzes it.
#[instrument(skip_all, name = "perturbation_workflow")]
pub fn run(config: &PerturbationConfig) -> Result<PerturbationReport, WorkflowError> {
    info!(
        spacing = config.spacing,
        "Building 3x3x3 lattice for perturbation analysis."
    );
    let system = LatticeSystem::cubic(config.spacing)?;
    analyze(&system, &config.params, config.probe_charge)
}

/// Runs the perturbation protocol on a copy of `system`; the input is not modified.
///
/// Charges in the input are ignored: the baseline is evaluated uncharged and the
/// charged phase sets every particle to `probe_charge`. Electrostatic energy
/// scales with the square of a uniform charge, so the reported charges do not
/// depend on the probe value. Both are magnitudes and never negative, whatever
/// the sign of `probe_charge`.
pub fn analyze(
    system: &LatticeSystem,
    params: &InteractionParams,
    probe_charge: f64,
) -> Result<PerturbationReport, WorkflowError> {
    let mut working = system.clone();

    // === Phase 1: Uncharged baseline ===
    working.set_all_charges(0.0);
    let baseline = Scorer::new(&working, params).calc_energy()?;
    debug!(vdw = baseline.vdw, elec = baseline.elec, "Baseline energy");

    // === Phase 2: Leave the central particle out of the van der Waals sum ===
    let central = working.central_particle()?.clone();
    let central_vdw = Scorer::new(&working, params)
        .particle_interaction(&central)?
        .vdw;
    let vdw_without_central = baseline.vdw - central_vdw;
    debug!(central_vdw, vdw_without_central, "Central particle removed");

    // === Phase 3: Uniform probe charge ===
    working.set_all_charges(probe_charge);
    let magnitude = probe_charge.abs();
    let charged = Scorer::new(&working, params).calc_energy()?;
    let equilibrating_charge =
        magnitude * balancing_factor("equilibrating charge", baseline.vdw, charged.elec)?;
    debug!(
        elec = charged.elec,
        equilibrating_charge, "Uniformly charged lattice"
    );

    // === Phase 4: Central particle with opposite sign ===
    let central = working.central_particle()?.clone();
    let central_elec = Scorer::new(&working, params)
        .particle_interaction(&central)?
        .elec;
    let inverted_central_elec = charged.elec - 2.0 * central_elec;
    let compensating_charge = magnitude
        * balancing_factor(
            "compensating central charge",
            baseline.vdw,
            inverted_central_elec,
        )?;
    debug!(
        central_elec,
        inverted_central_elec, compensating_charge, "Central charge inverted"
    );

    info!("Perturbation analysis complete.");
    Ok(PerturbationReport {
        baseline,
        central_vdw,
        vdw_without_central,
        charged,
        central_elec,
        inverted_central_elec,
        equilibrating_charge,
        compensating_charge,
    })
}

/// Returns `sqrt(-vdw / elec)`, the factor by which a uniform charge must be
/// scaled for the electrostatic energy to cancel `vdw`.
fn balancing_factor(quantity: &'static str, vdw: f64, elec: f64) -> Result<f64, WorkflowError> {
    let radicand = -vdw / elec;
    if radicand.is_finite() && radicand > 0.0 {
        Ok(radicand.sqrt())
    } else {
        Err(WorkflowError::Domain { quantity, radicand })
    }
}
