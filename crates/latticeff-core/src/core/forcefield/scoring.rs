use super::energy::{EnergyCalculationError, EnergyCalculator};
use super::params::InteractionParams;
use super::term::EnergyTerm;
use crate::core::models::particle::Particle;
use crate::core::models::system::LatticeSystem;
use tracing::trace;

/// Each unordered pair is visited once in each direction by the all-pairs sum.
const DOUBLE_COUNT_WEIGHT: f64 = 0.5;

/// Evaluates van der Waals and electrostatic energies over a [`LatticeSystem`].
///
/// The scorer borrows the system read-only; every method is free of side
/// effects and can be called repeatedly between charge updates.
pub struct Scorer<'a> {
    system: &'a LatticeSystem,
    params: &'a InteractionParams,
}

impl<'a> Scorer<'a> {
    pub fn new(system: &'a LatticeSystem, params: &'a InteractionParams) -> Self {
        Self { system, params }
    }

    /// Total energy of the system, summed over every pair of distinct sites.
    pub fn calc_energy(&self) -> Result<EnergyTerm, EnergyCalculationError> {
        self.calc_energy_excluding(|_| false)
    }

    /// Total energy with every particle matched by `excluded` left out of the sum.
    ///
    /// The particle collection is untouched; exclusion only filters the pairs.
    pub fn calc_energy_excluding<F>(
        &self,
        excluded: F,
    ) -> Result<EnergyTerm, EnergyCalculationError>
    where
        F: Fn(&Particle) -> bool,
    {
        let mut energy = EnergyTerm::default();

        for p1 in self.system.particles().iter().filter(|&p| !excluded(p)) {
            for p2 in self.system.particles().iter().filter(|&p| !excluded(p)) {
                if p1.same_site(p2) {
                    continue;
                }
                energy += self.pair_energy(p1, p2)? * DOUBLE_COUNT_WEIGHT;
            }
        }

        trace!(
            vdw = energy.vdw,
            elec = energy.elec,
            "Evaluated all-pairs lattice energy"
        );
        Ok(energy)
    }

    /// Interaction of a single particle with every other particle in the system.
    ///
    /// This is a one-directional sum, so no double-counting weight is applied.
    pub fn particle_interaction(
        &self,
        particle: &Particle,
    ) -> Result<EnergyTerm, EnergyCalculationError> {
        let mut energy = EnergyTerm::default();
        for other in self.system.particles() {
            if particle.same_site(other) {
                continue;
            }
            energy += self.pair_energy(particle, other)?;
        }
        Ok(energy)
    }

    fn pair_energy(
        &self,
        p1: &Particle,
        p2: &Particle,
    ) -> Result<EnergyTerm, EnergyCalculationError> {
        let spacing = self.system.spacing();
        Ok(EnergyTerm::new(
            EnergyCalculator::vdw_interaction(p1, p2, spacing, self.params)?,
            EnergyCalculator::elec_interaction(p1, p2, spacing, self.params)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::particle::LatticePosition;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn line_of_particles(n: i32, charge: f64) -> LatticeSystem {
        let particles = (0..n)
            .map(|i| Particle::new(LatticePosition::new(i, 0, 0), charge))
            .collect();
        LatticeSystem::from_particles(particles, 1.0).unwrap()
    }

    #[test]
    fn baseline_cubic_lattice_matches_reference_energy() {
        let system = LatticeSystem::cubic(3.8).unwrap();
        let params = InteractionParams::default();
        let energy = Scorer::new(&system, &params).calc_energy().unwrap();

        assert_eq!(energy.elec, 0.0);
        assert!(f64_approx_equal(energy.vdw, -6.864336204039167));
    }

    #[test]
    fn uniformly_charged_cubic_lattice_is_repulsive() {
        let mut system = LatticeSystem::cubic(3.8).unwrap();
        system.set_all_charges(1.0);
        let params = InteractionParams::default();
        let energy = Scorer::new(&system, &params).calc_energy().unwrap();

        assert!(energy.elec > 0.0);
        assert!((energy.elec - 17849.304231258888).abs() < 1e-7);
    }

    #[test]
    fn calc_energy_counts_each_unordered_pair_once() {
        // With k = 1, unit charges and unit spacing, a pair at distance r
        // contributes 1/r, so the total is the sum over unordered pairs.
        let params = InteractionParams::new(1.0, 0.0, 1.0).unwrap();
        for n in 1..=6 {
            let system = line_of_particles(n, 1.0);
            let energy = Scorer::new(&system, &params).calc_energy().unwrap();

            let mut expected = 0.0;
            for i in 0..n {
                for j in (i + 1)..n {
                    expected += 1.0 / f64::from(j - i);
                }
            }
            assert!(f64_approx_equal(energy.elec, expected), "n = {n}");
            assert_eq!(energy.vdw, 0.0);
        }
    }

    #[test]
    fn single_particle_system_has_zero_energy() {
        let system = line_of_particles(1, 1.0);
        let params = InteractionParams::default();
        let energy = Scorer::new(&system, &params).calc_energy().unwrap();
        assert_eq!(energy, EnergyTerm::default());
    }

    #[test]
    fn particle_interaction_of_center_matches_reference() {
        let mut system = LatticeSystem::cubic(3.8).unwrap();
        let params = InteractionParams::default();

        let center = system.central_particle().unwrap().clone();
        let vdw0 = Scorer::new(&system, &params)
            .particle_interaction(&center)
            .unwrap()
            .vdw;
        assert!(f64_approx_equal(vdw0, -0.8526046960040007));

        system.set_all_charges(1.0);
        let center = system.central_particle().unwrap().clone();
        let elec0 = Scorer::new(&system, &params)
            .particle_interaction(&center)
            .unwrap()
            .elec;
        assert!(f64_approx_equal(elec0, 1669.8979959419198));
    }

    #[test]
    fn excluding_the_center_removes_its_contribution_exactly() {
        let system = LatticeSystem::cubic(3.8).unwrap();
        let params = InteractionParams::default();
        let scorer = Scorer::new(&system, &params);

        let full = scorer.calc_energy().unwrap();
        let center = system.central_particle().unwrap();
        let center_term = scorer.particle_interaction(center).unwrap();
        let without_center = scorer.calc_energy_excluding(|p| p.is_central()).unwrap();

        assert!(f64_approx_equal(without_center.vdw, full.vdw - center_term.vdw));
        assert!(f64_approx_equal(without_center.vdw, -6.011731508035166));
        assert_eq!(system.len(), 27);
    }

    #[test]
    fn excluding_every_particle_gives_zero_energy() {
        let system = LatticeSystem::cubic(3.8).unwrap();
        let params = InteractionParams::default();
        let energy = Scorer::new(&system, &params)
            .calc_energy_excluding(|_| true)
            .unwrap();
        assert_eq!(energy, EnergyTerm::default());
    }
}
