use torricelli_core::Sample;
use uom::si::f64::Velocity;

/// Event emitted by the Euler drain solver for each sample.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial state).
    pub step: usize,

    /// Time and height after this step.
    pub sample: Sample,

    /// The rate `dh/dt` used for this step, or `None` for step 0.
    pub rate: Option<Velocity>,
}
