use crate::cli::EnergyArgs;
use crate::config;
use crate::error::Result;
use latticeff::core::forcefield::scoring::Scorer;
use latticeff::core::forcefield::term::EnergyTerm;
use latticeff::core::models::system::LatticeSystem;
use latticeff::workflows::error::WorkflowError;
use tracing::info;

pub fn run(args: EnergyArgs) -> Result<()> {
    let energy = evaluate(&args)?;
    println!("Evdw  = {:>14.6} kcal/mol", energy.vdw);
    println!("Eelec = {:>14.6} kcal/mol", energy.elec);
    println!("Etot  = {:>14.6} kcal/mol", energy.total());
    Ok(())
}

fn evaluate(args: &EnergyArgs) -> Result<EnergyTerm> {
    let settings = config::build_lattice_settings(&args.lattice)?;

    info!(
        spacing = settings.spacing,
        charge = args.charge,
        "Evaluating lattice energy with uniform charge."
    );
    let mut system = LatticeSystem::cubic(settings.spacing).map_err(WorkflowError::from)?;
    system.set_all_charges(args.charge);

    let energy = Scorer::new(&system, &settings.params)
        .calc_energy()
        .map_err(WorkflowError::from)?;
    Ok(energy)
}
