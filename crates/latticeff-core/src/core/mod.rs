//! # Core Module
//!
//! Stateless building blocks of the lattice energy model.
//!
//! - **Lattice Representation** ([`models`]) - Particles, lattice sites and the particle system
//! - **Energy Calculations** ([`forcefield`]) - Interaction parameters, pair potentials and
//!   all-pairs summation

pub mod forcefield;
pub mod models;
