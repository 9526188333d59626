use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "LatticeFF CLI - Lennard-Jones and Coulomb energies of a 3x3x3 lattice of point charges.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the perturbation analysis: remove the central particle and find balancing charges.
    Perturb(PerturbArgs),
    /// Evaluate the lattice energy once with a uniform charge on every particle.
    Energy(EnergyArgs),
}

/// Options shared by every command that builds a lattice.
#[derive(Args, Debug, Default, Clone)]
pub struct LatticeArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to a TOML file holding `sigma`, `epsilon` and `coulomb-constant`.
    #[arg(long, value_name = "PATH")]
    pub params: Option<PathBuf>,

    /// Override the lattice spacing in Angstroms.
    #[arg(short = 'd', long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub spacing: Option<f64>,

    /// Override the Lennard-Jones sigma in Angstroms.
    #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub sigma: Option<f64>,

    /// Override the Lennard-Jones well depth in kcal/mol.
    #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub epsilon: Option<f64>,

    /// Override the Coulomb conversion factor in kcal*A/(mol*e^2).
    #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub coulomb_constant: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S lattice.spacing=4.0
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `perturb` subcommand.
#[derive(Args, Debug)]
pub struct PerturbArgs {
    #[command(flatten)]
    pub lattice: LatticeArgs,

    /// Override the uniform probe charge (in e) used in the charged phases.
    #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub probe_charge: Option<f64>,
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug)]
pub struct EnergyArgs {
    #[command(flatten)]
    pub lattice: LatticeArgs,

    /// Uniform charge (in e) placed on every particle.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.0, allow_hyphen_values = true)]
    pub charge: f64,
}
