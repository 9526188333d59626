use std::ops::{Add, AddAssign, Mul};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyTerm {
    pub vdw: f64,
    pub elec: f64,
}

impl EnergyTerm {
    pub fn new(vdw: f64, elec: f64) -> Self {
        Self { vdw, elec }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.vdw + self.elec
    }
}

impl Add for EnergyTerm {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            vdw: self.vdw + rhs.vdw,
            elec: self.elec + rhs.elec,
        }
    }
}

impl AddAssign for EnergyTerm {
    fn add_assign(&mut self, rhs: Self) {
        self.vdw += rhs.vdw;
        self.elec += rhs.elec;
    }
}

impl Mul<f64> for EnergyTerm {
    type Output = Self;

    fn mul(self, factor: f64) -> Self::Output {
        Self {
            vdw: self.vdw * factor,
            elec: self.elec * factor,
        }
    }
}
