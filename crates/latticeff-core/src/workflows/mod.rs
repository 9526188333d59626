//! # Workflows Module
//!
//! High-level procedures built on the [`core`](crate::core) energy model.
//!
//! ## Overview
//!
//! - **Perturbation Analysis** ([`perturbation`]) - Evaluates the uncharged lattice,
//!   removes the central particle from the van der Waals sum, then finds the uniform
//!   charge (and the inverted central charge) whose electrostatic energy cancels the
//!   van der Waals energy.
//! - **Configuration** ([`config`]) - Validated inputs for the analysis, assembled with
//!   [`config::PerturbationConfigBuilder`].
//! - **Errors** ([`error`]) - Failures surfaced by the workflows, including domain errors
//!   when no real balancing charge exists.

pub mod config;
pub mod error;
pub mod perturbation;
