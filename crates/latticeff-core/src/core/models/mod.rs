//! # Core Models Module
//!
//! Data structures describing the particle lattice the energy model works on.
//!
//! ## Key Components
//!
//! - [`particle`] - Lattice sites ([`particle::LatticePosition`]) and the point
//!   particles that occupy them
//! - [`system`] - The fixed particle collection together with its lattice spacing
//!
//! ## Usage
//!
//! ```ignore
//! use latticeff::core::models::{particle::LatticePosition, system::LatticeSystem};
//!
//! let mut system = LatticeSystem::cubic(3.8)?;
//! system.set_charge(LatticePosition::ORIGIN, -1.0)?;
//! ```

pub mod particle;
pub mod system;
