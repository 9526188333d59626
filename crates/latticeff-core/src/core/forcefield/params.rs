use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Lennard-Jones characteristic distance σ, in Angstroms.
pub const DEFAULT_SIGMA: f64 = 3.4;
/// Lennard-Jones well depth ε, in kcal/mol.
pub const DEFAULT_EPSILON: f64 = 0.09;
/// Coulomb conversion factor, in kcal·Å/(mol·e²).
pub const DEFAULT_COULOMB_CONSTANT: f64 = 332.16;

/// Physical constants shared by every pair interaction.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct InteractionParams {
    pub sigma: f64,
    pub epsilon: f64,
    pub coulomb_constant: f64,
}

impl Default for InteractionParams {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            epsilon: DEFAULT_EPSILON,
            coulomb_constant: DEFAULT_COULOMB_CONSTANT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid interaction parameter: {0}")]
    Invalid(String),
}

impl InteractionParams {
    pub fn new(sigma: f64, epsilon: f64, coulomb_constant: f64) -> Result<Self, ParamLoadError> {
        let params = Self {
            sigma,
            epsilon,
            coulomb_constant,
        };
        params.validate()?;
        Ok(params)
    }

    /// Reads parameters from a TOML file; missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let params: Self = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParamLoadError> {
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(ParamLoadError::Invalid(format!(
                "sigma must be positive and finite, got {}",
                self.sigma
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(ParamLoadError::Invalid(format!(
                "epsilon must be non-negative and finite, got {}",
                self.epsilon
            )));
        }
        if !self.coulomb_constant.is_finite() {
            return Err(ParamLoadError::Invalid(format!(
                "coulomb-constant must be finite, got {}",
                self.coulomb_constant
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn default_matches_reference_constants() {
        let params = InteractionParams::default();
        assert_eq!(params.sigma, 3.4);
        assert_eq!(params.epsilon, 0.09);
        assert_eq!(params.coulomb_constant, 332.16);
    }

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("params.toml");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "sigma = 3.0\nepsilon = 0.2\ncoulomb-constant = 332.0637").unwrap();

        let params = InteractionParams::load(&file_path).unwrap();
        assert_eq!(params, InteractionParams::new(3.0, 0.2, 332.0637).unwrap());
    }

    #[test]
    fn load_fills_missing_keys_with_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("params.toml");
        std::fs::write(&file_path, "epsilon = 0.5\n").unwrap();

        let params = InteractionParams::load(&file_path).unwrap();
        assert_eq!(params.epsilon, 0.5);
        assert_eq!(params.sigma, DEFAULT_SIGMA);
        assert_eq!(params.coulomb_constant, DEFAULT_COULOMB_CONSTANT);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = InteractionParams::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_unknown_key() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("params.toml");
        std::fs::write(&file_path, "dielectric = 4.0\n").unwrap();
        let result = InteractionParams::load(&file_path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn load_fails_for_non_positive_sigma() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("params.toml");
        std::fs::write(&file_path, "sigma = 0.0\n").unwrap();
        let result = InteractionParams::load(&file_path);
        assert!(matches!(result, Err(ParamLoadError::Invalid(_))));
    }

    #[test]
    fn new_rejects_negative_epsilon() {
        assert!(matches!(
            InteractionParams::new(3.4, -0.1, 332.16),
            Err(ParamLoadError::Invalid(_))
        ));
    }
}
