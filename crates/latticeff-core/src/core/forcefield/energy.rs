use super::params::InteractionParams;
use super::potentials;
use crate::core::models::particle::{LatticePosition, Particle};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum EnergyCalculationError {
    #[error("Pair interaction requested for two particles at the same site {0}")]
    CoincidentParticles(LatticePosition),
}

pub struct EnergyCalculator;

impl EnergyCalculator {
    /// Euclidean distance between two particles, in lattice units.
    #[inline]
    pub fn distance(p1: &Particle, p2: &Particle) -> f64 {
        nalgebra::distance(&p1.position().to_point(), &p2.position().to_point())
    }

    pub fn vdw_interaction(
        p1: &Particle,
        p2: &Particle,
        spacing: f64,
        params: &InteractionParams,
    ) -> Result<f64, EnergyCalculationError> {
        let dist = Self::physical_distance(p1, p2, spacing)?;
        Ok(potentials::lennard_jones_12_6(
            dist,
            params.sigma,
            params.epsilon,
        ))
    }

    pub fn elec_interaction(
        p1: &Particle,
        p2: &Particle,
        spacing: f64,
        params: &InteractionParams,
    ) -> Result<f64, EnergyCalculationError> {
        let dist = Self::physical_distance(p1, p2, spacing)?;
        Ok(potentials::coulomb(
            dist,
            p1.charge,
            p2.charge,
            params.coulomb_constant,
        ))
    }

    fn physical_distance(
        p1: &Particle,
        p2: &Particle,
        spacing: f64,
    ) -> Result<f64, EnergyCalculationError> {
        if p1.same_site(p2) {
            return Err(EnergyCalculationError::CoincidentParticles(p1.position()));
        }
        Ok(Self::distance(p1, p2) * spacing)
    }
}
