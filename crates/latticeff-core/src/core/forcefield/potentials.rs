/// Lennard-Jones 12-6 potential in its `σ` form, `4ε[(σ/r)¹² − (σ/r)⁶]`.
///
/// `dist` must be non-zero; coincident pairs are rejected upstream.
#[inline]
pub fn lennard_jones_12_6(dist: f64, sigma: f64, epsilon: f64) -> f64 {
    let f = sigma / dist;
    let f6 = f.powi(6);
    let f12 = f6 * f6;
    4.0 * epsilon * (f12 - f6)
}

/// Coulomb interaction `k·q1·q2 / r` in vacuum.
///
/// `k` carries the unit conversion, e.g. 332.16 kcal·Å/(mol·e²).
#[inline]
pub fn coulomb(dist: f64, q1: f64, q2: f64, coulomb_constant: f64) -> f64 {
    coulomb_constant * q1 * q2 / dist
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn lennard_jones_is_zero_at_sigma() {
        assert!(f64_approx_equal(lennard_jones_12_6(3.4, 3.4, 0.09), 0.0));
    }

    #[test]
    fn lennard_jones_at_minimum_returns_negative_well_depth() {
        let r_min = 2f64.powf(1.0 / 6.0) * 2.0;
        assert!(f64_approx_equal(lennard_jones_12_6(r_min, 2.0, 1.5), -1.5));
    }

    #[test]
    fn lennard_jones_is_repulsive_inside_sigma() {
        assert!(lennard_jones_12_6(3.0, 3.4, 0.09) > 0.0);
    }

    #[test]
    fn coulomb_calculates_repulsive_force_correctly() {
        assert!(f64_approx_equal(coulomb(1.0, 1.0, 1.0, 332.16), 332.16));
    }

    #[test]
    fn coulomb_calculates_attractive_force_correctly() {
        assert!(f64_approx_equal(coulomb(2.0, 1.0, -1.0, 332.16), -166.08));
    }

    #[test]
    fn coulomb_vanishes_for_uncharged_pair() {
        assert_eq!(coulomb(3.8, 0.0, 1.0, 332.16), 0.0);
    }
}
