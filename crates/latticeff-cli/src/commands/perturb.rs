use crate::cli::PerturbArgs;
use crate::config;
use crate::error::Result;
use latticeff::workflows::perturbation::{self, PerturbationReport};
use tracing::info;

pub fn run(args: PerturbArgs) -> Result<()> {
    info!("Resolving configuration from defaults, file and CLI arguments...");
    let config = config::build_config(&args.lattice, args.probe_charge)?;

    info!("Invoking the perturbation workflow...");
    let report = perturbation::run(&config)?;

    print!("{}", format_report(&report));
    Ok(())
}

pub fn format_report(report: &PerturbationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Evdw                              = {:>14.6} kcal/mol\n",
        report.baseline.vdw
    ));
    out.push_str(&format!(
        "Evdw without central particle     = {:>14.6} kcal/mol\n",
        report.vdw_without_central
    ));
    out.push_str(&format!(
        "Charge to equilibrate             = {:>14.6} e\n",
        report.equilibrating_charge
    ));
    out.push_str(&format!(
        "Central negative to compensate    = {:>14.6} e\n",
        report.compensating_charge
    ));
    out
}
