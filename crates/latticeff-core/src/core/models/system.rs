use super::particle::{LatticePosition, Particle};
use std::collections::HashSet;
use thiserror::Error;

/// Half-width of the cubic lattice: coordinates run over `-1..=1` on each axis.
const CUBIC_HALF_WIDTH: i32 = 1;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum SystemError {
    #[error("Lattice spacing must be a positive finite number, got {0}")]
    InvalidSpacing(f64),
    #[error("More than one particle occupies lattice site {0}")]
    DuplicateSite(LatticePosition),
    #[error("No particle occupies the central lattice site (0, 0, 0)")]
    MissingCentralParticle,
    #[error("No particle occupies lattice site {0}")]
    ParticleNotFound(LatticePosition),
}

/// A fixed collection of point particles on a regular lattice.
///
/// The particle set and the spacing are frozen at construction. Charges are the
/// only mutable state. Particles are never removed: callers that want to leave
/// one out of an energy sum filter it at summation time (see
/// [`Scorer::calc_energy_excluding`](crate::core::forcefield::scoring::Scorer::calc_energy_excluding)).
#[derive(Debug, Clone)]
pub struct LatticeSystem {
    particles: Vec<Particle>,
    spacing: f64,
}

impl LatticeSystem {
    /// Builds the 3×3×3 lattice over `{-1, 0, 1}^3`, all charges zero.
    ///
    /// Particles are ordered with `x` varying slowest and `z` fastest.
    pub fn cubic(spacing: f64) -> Result<Self, SystemError> {
        validate_spacing(spacing)?;

        let range = -CUBIC_HALF_WIDTH..=CUBIC_HALF_WIDTH;
        let mut particles = Vec::with_capacity(27);
        for x in range.clone() {
            for y in range.clone() {
                for z in range.clone() {
                    particles.push(Particle::new(LatticePosition::new(x, y, z), 0.0));
                }
            }
        }

        Ok(Self { particles, spacing })
    }

    /// Builds a system from an arbitrary set of particles on distinct sites.
    pub fn from_particles(particles: Vec<Particle>, spacing: f64) -> Result<Self, SystemError> {
        validate_spacing(spacing)?;

        let mut seen = HashSet::with_capacity(particles.len());
        for p in &particles {
            if !seen.insert(p.position()) {
                return Err(SystemError::DuplicateSite(p.position()));
            }
        }

        Ok(Self { particles, spacing })
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Minimum inter-particle distance; converts lattice units to Angstroms.
    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particle(&self, position: LatticePosition) -> Option<&Particle> {
        self.particles.iter().find(|p| p.position() == position)
    }

    /// Returns the unique particle sitting at the origin.
    pub fn central_particle(&self) -> Result<&Particle, SystemError> {
        self.particles
            .iter()
            .find(|p| p.is_central())
            .ok_or(SystemError::MissingCentralParticle)
    }

    pub fn set_charge(&mut self, position: LatticePosition, charge: f64) -> Result<(), SystemError> {
        let particle = self
            .particles
            .iter_mut()
            .find(|p| p.position() == position)
            .ok_or(SystemError::ParticleNotFound(position))?;
        particle.charge = charge;
        Ok(())
    }

    pub fn set_all_charges(&mut self, charge: f64) {
        for p in &mut self.particles {
            p.charge = charge;
        }
    }

    pub fn total_charge(&self) -> f64 {
        self.particles.iter().map(|p| p.charge).sum()
    }
}

fn validate_spacing(spacing: f64) -> Result<(), SystemError> {
    if spacing.is_finite() && spacing > 0.0 {
        Ok(())
    } else {
        Err(SystemError::InvalidSpacing(spacing))
    }
}
