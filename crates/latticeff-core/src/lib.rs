//! # LatticeFF Core Library
//!
//! A small pairwise energy model: point particles on a 3×3×3 lattice interact
//! through a Lennard-Jones 12-6 van der Waals term and a Coulomb term, summed
//! over all pairs.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Data models (`LatticeSystem`, `Particle`) and
//!   the pure energy functions (`potentials`, `energy`, `scoring`).
//!
//! - **[`workflows`]: The Public API.** Complete procedures built on top of
//!   `core`, such as the perturbation analysis that removes the central particle
//!   and searches for the charges that balance the van der Waals energy.

pub mod core;
pub mod workflows;
