//! Drivers that run the forward Euler drain step to completion.
//!
//! - [`transient::euler`]: a single tank, as a lazy trajectory or a
//!   materialized solution with an observer
//! - [`transient::lockstep`]: several independent tanks sharing one clock,
//!   stepped in frames
//! - [`sweep`]: batch runs over many parameter sets with per-row failures

pub mod sweep;
pub mod transient;
