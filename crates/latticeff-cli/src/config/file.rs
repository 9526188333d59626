use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileLatticeConfig {
    pub spacing: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FilePotentialConfig {
    #[serde(rename = "params-path")]
    pub params_path: Option<PathBuf>,
    pub sigma: Option<f64>,
    pub epsilon: Option<f64>,
    #[serde(rename = "coulomb-constant")]
    pub coulomb_constant: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FilePerturbationConfig {
    #[serde(rename = "probe-charge")]
    pub probe_charge: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub lattice: Option<FileLatticeConfig>,
    pub potential: Option<FilePotentialConfig>,
    pub perturbation: Option<FilePerturbationConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
