use crate::core::forcefield::params::InteractionParams;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Everything the perturbation analysis needs to build and probe a lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct PerturbationConfig {
    /// Lattice spacing in Angstroms.
    pub spacing: f64,
    pub params: InteractionParams,
    /// Uniform charge (in e) applied to every particle when probing electrostatics.
    pub probe_charge: f64,
}

#[derive(Default)]
pub struct PerturbationConfigBuilder {
    spacing: Option<f64>,
    params: Option<InteractionParams>,
    probe_charge: Option<f64>,
}

impl PerturbationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }
    pub fn params(mut self, params: InteractionParams) -> Self {
        self.params = Some(params);
        self
    }
    pub fn probe_charge(mut self, charge: f64) -> Self {
        self.probe_charge = Some(charge);
        self
    }

    pub fn build(self) -> Result<PerturbationConfig, ConfigError> {
        let spacing = self
            .spacing
            .ok_or(ConfigError::MissingParameter("spacing"))?;
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "spacing",
                reason: format!("must be positive and finite, got {}", spacing),
            });
        }

        let params = self.params.ok_or(ConfigError::MissingParameter("params"))?;
        params
            .validate()
            .map_err(|e| ConfigError::InvalidParameter {
                name: "params",
                reason: e.to_string(),
            })?;

        let probe_charge = self
            .probe_charge
            .ok_or(ConfigError::MissingParameter("probe_charge"))?;
        if !probe_charge.is_finite() || probe_charge == 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "probe_charge",
                reason: format!("must be finite and non-zero, got {}", probe_charge),
            });
        }

        Ok(PerturbationConfig {
            spacing,
            params,
            probe_charge,
        })
    }
}
