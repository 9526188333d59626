//! # Force Field Module
//!
//! Pairwise energy evaluation for the particle lattice.
//!
//! ## Overview
//!
//! Two classical non-bonded terms are supported:
//!
//! - **Van der Waals interactions** using the 12-6 Lennard-Jones potential in its `σ/ε` form
//! - **Electrostatic interactions** using Coulomb's law in vacuum
//!
//! ## Key Components
//!
//! - [`params`] - The physical constants `σ`, `ε` and the Coulomb factor, loadable from TOML
//! - [`energy`] - Distance and single-pair interaction functions
//! - [`term`] - Energy term aggregation
//! - [`scoring`] - All-pairs and one-particle energy sums over a system
//!
//! ## Usage
//!
//! ```ignore
//! use latticeff::core::forcefield::{params::InteractionParams, scoring::Scorer};
//!
//! let params = InteractionParams::default();
//! let energy = Scorer::new(&system, &params).calc_energy()?;
//! ```

pub mod energy;
pub mod params;
pub(crate) mod potentials;
pub mod scoring;
pub mod term;
