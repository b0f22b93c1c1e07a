use torricelli_core::StepError;
use uom::si::{
    f64::{Length, Time},
    length::meter,
    time::second,
};

/// Errors that can occur while running a drain simulation.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Step(#[from] StepError),

    #[error(
        "tank did not drain within {steps} steps (t = {} s, h = {} m)",
        .time.get::<second>(),
        .height.get::<meter>()
    )]
    DidNotConverge {
        steps: usize,
        time: Time,
        height: Length,
    },
}
