use torricelli_core::Sample;
use uom::si::f64::Time;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The level reached exactly zero.
    Drained,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler drain run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Samples from each step, including the initial state.
    pub history: Vec<Sample>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl Solution {
    /// Returns the last recorded sample.
    ///
    /// Solutions produced by the solver always hold the initial sample, so
    /// this is only `None` for a hand-built, empty history.
    #[must_use]
    pub fn final_sample(&self) -> Option<Sample> {
        self.history.last().copied()
    }

    /// Returns the elapsed time at the last recorded sample.
    ///
    /// For a [`Status::Drained`] run this is the total drain time.
    #[must_use]
    pub fn drain_time(&self) -> Option<Time> {
        self.final_sample().map(|sample| sample.time)
    }
}
