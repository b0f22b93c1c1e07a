//! Core types for simulating a tank draining through an orifice under gravity.
//!
//! The outflow follows Torricelli's law, `v = sqrt(2·g·h)`, and the liquid
//! level is stepped forward with explicit (forward) Euler at a fixed time step.
//! This crate defines the pieces every solver and observer builds on:
//!
//! - [`CrossSection`]: the capability "horizontal area at height h", with
//!   [`TankGeometry`] and [`Cone`] as the provided shapes
//! - [`DrainConfig`] / [`DrainParameters`]: raw and validated run parameters
//! - [`DrainState`]: the mutable `(time, height)` state and its single
//!   [`advance`](DrainState::advance) step
//! - [`Sample`] / [`Step`]: what each step produces
//! - [`physics`]: the efflux velocity and height-rate laws
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! All physical quantities are [`uom`] SI quantities, so a tank may be described
//! in metres or centimetres without any change to the integrator.

pub mod constraint;
pub mod geometry;
mod observer;
mod parameters;
pub mod physics;
mod state;

pub use geometry::{Cone, CrossSection, Orientation, TankGeometry};
pub use observer::Observer;
pub use parameters::{DrainConfig, DrainParameters, ParameterError};
pub use state::{DrainState, Sample, Step, StepError};
