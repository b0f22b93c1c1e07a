use uom::si::f64::Time;

use super::Frame;

/// Control actions supported by the lockstep solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run early and return the frames so far.
    StopEarly,
}

/// Indicates how the lockstep solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every tank drained.
    Drained,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a lockstep run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<const N: usize> {
    /// How the solver terminated.
    pub status: Status,

    /// Every emitted frame, including the initial one.
    pub frames: Vec<Frame<N>>,

    /// Time at which each tank drained, or `None` if it had not yet drained.
    pub drain_times: [Option<Time>; N],
}
