pub mod energy;
pub mod perturb;
