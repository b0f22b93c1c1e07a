use uom::si::f64::{Length, Time};

/// A snapshot of a lockstep run, emitted after each batch of steps.
///
/// A renderer consumes one frame per redraw: the shared clock, the level in
/// every tank, and whether the run has finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<const N: usize> {
    /// Index of this frame (0 for the initial state).
    pub index: usize,

    /// Shared clock after the batch.
    pub time: Time,

    /// Liquid height in each tank, in lane order.
    pub heights: [Length; N],

    /// `true` once every tank has drained.
    pub finished: bool,
}
