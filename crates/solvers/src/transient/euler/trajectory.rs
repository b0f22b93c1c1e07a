use std::iter::FusedIterator;

use torricelli_core::{CrossSection, DrainParameters, DrainState, Step};
use uom::{ConstZero, si::f64::Length};

use super::{Error, Event};

/// A lazy sequence of drain events.
///
/// Yields the initial sample as step 0, then one event per accepted Euler
/// step. The sequence ends after the first sample whose height is exactly
/// zero. If the tank is still draining after
/// [`max_steps`](DrainParameters::max_steps) steps, or the geometry reports an
/// invalid area, a single `Err` is yielded and the sequence ends.
#[derive(Debug, Clone)]
pub struct Trajectory<'a, G: ?Sized> {
    tank: &'a G,
    params: &'a DrainParameters,
    state: DrainState,
    step: usize,
    phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Initial,
    Draining,
    Done,
}

impl<'a, G> Trajectory<'a, G>
where
    G: CrossSection + ?Sized,
{
    pub(super) fn new(tank: &'a G, params: &'a DrainParameters) -> Self {
        Self {
            tank,
            params,
            state: DrainState::new(params),
            step: 0,
            phase: Phase::Initial,
        }
    }

    /// Returns the current state of the tank.
    #[must_use]
    pub fn state(&self) -> &DrainState {
        &self.state
    }

    fn advance(&mut self) -> Option<Result<Event, Error>> {
        if self.step >= self.params.max_steps() {
            self.phase = Phase::Done;
            return Some(Err(Error::DidNotConverge {
                steps: self.step,
                time: self.state.time(),
                height: self.state.height(),
            }));
        }

        match self.state.advance(self.tank, self.params) {
            Ok(Some(Step { sample, rate })) => {
                self.step += 1;
                if sample.height == Length::ZERO {
                    self.phase = Phase::Done;
                }
                Some(Ok(Event {
                    step: self.step,
                    sample,
                    rate: Some(rate),
                }))
            }
            Ok(None) => {
                self.phase = Phase::Done;
                None
            }
            Err(err) => {
                self.phase = Phase::Done;
                Some(Err(err.into()))
            }
        }
    }
}

impl<G> Iterator for Trajectory<'_, G>
where
    G: CrossSection + ?Sized,
{
    type Item = Result<Event, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Initial => {
                let sample = self.state.sample();
                self.phase = if sample.height == Length::ZERO {
                    Phase::Done
                } else {
                    Phase::Draining
                };
                Some(Ok(Event {
                    step: 0,
                    sample,
                    rate: None,
                }))
            }
            Phase::Draining => self.advance(),
            Phase::Done => None,
        }
    }
}

impl<G> FusedIterator for Trajectory<'_, G> where G: CrossSection + ?Sized {}
