pub mod euler;
pub mod lockstep;
