use thiserror::Error;

use super::config::ConfigError;
use crate::core::forcefield::energy::EnergyCalculationError;
use crate::core::models::system::SystemError;

#[derive(Debug, Error, PartialEq)]
pub enum WorkflowError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Invalid lattice system: {source}")]
    System {
        #[from]
        source: SystemError,
    },

    #[error("Energy evaluation failed: {source}")]
    Energy {
        #[from]
        source: EnergyCalculationError,
    },

    #[error(
        "Cannot compute {quantity}: square root of {radicand} is not a positive real number (van der Waals and electrostatic energies must have opposite signs)"
    )]
    Domain {
        quantity: &'static str,
        radicand: f64,
    },
}
