//! Layered configuration for the CLI.
//!
//! Values are resolved in increasing order of precedence: built-in defaults,
//! an optional standalone parameter file (`--params`), the TOML config file,
//! `-S KEY=VALUE` overrides, and finally dedicated command-line flags.

pub mod builder;
pub mod defaults;
pub mod file;

pub use builder::{build_config, build_lattice_settings};
