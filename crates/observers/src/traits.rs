//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can watch a single-tank run and a lockstep run alike.
//!
//! # Event traits
//!
//! - [`HasTime`]: events stamped with the simulated time
//! - [`HasHeights`]: events that carry the level in each of `N` tanks
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use torricelli_core::Observer;
//! use torricelli_observers::traits::{CanStopEarly, HasHeights};
//! use uom::si::{f64::Length, length::meter};
//!
//! /// Stops once the first tank falls below a mark.
//! struct BelowMark(Length);
//!
//! impl<E: HasHeights<1>, A: CanStopEarly> Observer<E, A> for BelowMark {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.heights()[0] < self.0).then(A::stop_early)
//!     }
//! }
//! ```

use torricelli_solvers::transient::{euler, lockstep};
use uom::si::f64::{Length, Time};

/// An event stamped with the simulated time.
pub trait HasTime {
    /// Returns the elapsed simulated time for this event.
    fn time(&self) -> Time;
}

/// An event that carries the liquid level in each of `N` tanks.
pub trait HasHeights<const N: usize> {
    /// Returns the level in each tank, in lane order.
    fn heights(&self) -> [Length; N];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- euler::Event ---

impl HasTime for euler::Event {
    fn time(&self) -> Time {
        self.sample.time
    }
}

impl HasHeights<1> for euler::Event {
    fn heights(&self) -> [Length; 1] {
        [self.sample.height]
    }
}

// --- lockstep::Frame ---

impl<const N: usize> HasTime for lockstep::Frame<N> {
    fn time(&self) -> Time {
        self.time
    }
}

impl<const N: usize> HasHeights<N> for lockstep::Frame<N> {
    fn heights(&self) -> [Length; N] {
        self.heights
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for lockstep::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
