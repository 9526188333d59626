use nalgebra::Point3;
use std::fmt;

/// Identifies a lattice site by its integer coordinates in lattice units.
///
/// The position is the identity key of a [`Particle`]. Two particles occupying
/// the same site are considered the same particle, regardless of the charge
/// each of them carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LatticePosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl LatticePosition {
    /// The lattice origin, home of the central particle.
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }

    /// Converts the site to a floating-point point, still in lattice units.
    #[inline]
    pub fn to_point(&self) -> Point3<f64> {
        Point3::new(self.x as f64, self.y as f64, self.z as f64)
    }
}

impl From<[i32; 3]> for LatticePosition {
    fn from(c: [i32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for LatticePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A point particle sitting on a lattice site.
///
/// The position is fixed at construction; only the charge may be changed
/// afterwards. `Particle` deliberately does not implement `PartialEq`: identity
/// is decided by [`Particle::same_site`], which compares positions only.
#[derive(Debug, Clone)]
pub struct Particle {
    position: LatticePosition,
    /// Charge in elementary charge units (e).
    pub charge: f64,
}

impl Particle {
    pub fn new(position: LatticePosition, charge: f64) -> Self {
        Self { position, charge }
    }

    #[inline]
    pub fn position(&self) -> LatticePosition {
        self.position
    }

    /// Returns `true` when both particles occupy the same lattice site.
    #[inline]
    pub fn same_site(&self, other: &Particle) -> bool {
        self.position == other.position
    }

    #[inline]
    pub fn is_central(&self) -> bool {
        self.position.is_origin()
    }
}
