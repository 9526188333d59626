use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FilePerturbationConfig};
use crate::cli::LatticeArgs;
use crate::error::{CliError, Result};
use latticeff::core::forcefield::params::InteractionParams;
use latticeff::workflows::config::{PerturbationConfig, PerturbationConfigBuilder};
use latticeff::workflows::error::WorkflowError;
use std::path::Path;
use tracing::debug;

/// Spacing and interaction parameters resolved from every configuration layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeSettings {
    pub spacing: f64,
    pub params: InteractionParams,
}

pub fn build_config(args: &LatticeArgs, probe_charge: Option<f64>) -> Result<PerturbationConfig> {
    let (settings, perturbation_file) = resolve_layers(args)?;

    let probe_charge = probe_charge
        .or(perturbation_file.probe_charge)
        .unwrap_or(DefaultsConfig::default().probe_charge);

    let config = PerturbationConfigBuilder::new()
        .spacing(settings.spacing)
        .params(settings.params)
        .probe_charge(probe_charge)
        .build()
        .map_err(WorkflowError::from)?;

    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

/// Resolves only the lattice and potential layers; `[perturbation]` values are
/// parsed but neither merged nor validated.
pub fn build_lattice_settings(args: &LatticeArgs) -> Result<LatticeSettings> {
    let (settings, _) = resolve_layers(args)?;
    settings.params.validate()?;

    debug!("Resolved lattice settings: {:?}", settings);
    Ok(settings)
}

fn resolve_layers(args: &LatticeArgs) -> Result<(LatticeSettings, FilePerturbationConfig)> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let lattice_file = file_config.lattice.take().unwrap_or_default();
    let spacing = args
        .spacing
        .or(lattice_file.spacing)
        .unwrap_or(defaults.spacing);

    let potential_file = file_config.potential.take().unwrap_or_default();
    let base_params = match args.params.as_deref().or(potential_file.params_path.as_deref()) {
        Some(path) => load_params(path)?,
        None => InteractionParams::default(),
    };
    let params = InteractionParams {
        sigma: args
            .sigma
            .or(potential_file.sigma)
            .unwrap_or(base_params.sigma),
        epsilon: args
            .epsilon
            .or(potential_file.epsilon)
            .unwrap_or(base_params.epsilon),
        coulomb_constant: args
            .coulomb_constant
            .or(potential_file.coulomb_constant)
            .unwrap_or(base_params.coulomb_constant),
    };

    let perturbation_file = file_config.perturbation.take().unwrap_or_default();
    Ok((LatticeSettings { spacing, params }, perturbation_file))
}

fn load_params(path: &Path) -> Result<InteractionParams> {
    debug!("Loading interaction parameters from {:?}", path);
    Ok(InteractionParams::load(path)?)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;

        let value: f64 = value_str.trim().parse().map_err(|_| {
            CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
        })?;

        match key.trim() {
            "lattice.spacing" => {
                config
                    .lattice
                    .get_or_insert_with(Default::default)
                    .spacing = Some(value);
            }
            "potential.sigma" => {
                config
                    .potential
                    .get_or_insert_with(Default::default)
                    .sigma = Some(value);
            }
            "potential.epsilon" => {
                config
                    .potential
                    .get_or_insert_with(Default::default)
                    .epsilon = Some(value);
            }
            "potential.coulomb-constant" => {
                config
                    .potential
                    .get_or_insert_with(Default::default)
                    .coulomb_constant = Some(value);
            }
            "perturbation.probe-charge" => {
                config
                    .perturbation
                    .get_or_insert_with(Default::default)
                    .probe_charge = Some(value);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
