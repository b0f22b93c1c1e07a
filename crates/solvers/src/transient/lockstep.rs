//! Several independent tanks drained on one shared clock.
//!
//! Each tank (a *lane*) owns its geometry and its own [`DrainState`]; lanes
//! share nothing except the parameters and the clock. On every step, each lane
//! whose level is above the empty threshold takes one Euler step, and the
//! shared clock advances only if at least one lane did. The run is finished
//! once every lane has drained.
//!
//! Steps are grouped into [`Frame`]s so that a render loop can call
//! [`Lockstep::advance_frame`] once per redraw while the simulation owns all of
//! the physical state.
//!
//! # Example
//!
//! ```ignore
//! use torricelli_solvers::transient::lockstep::Lockstep;
//!
//! let mut sim = Lockstep::new([upright, inverted], params);
//! while !sim.is_finished() {
//!     let frame = sim.advance_frame(50)?;
//!     draw(frame.time, frame.heights);
//! }
//! ```

mod frame;
mod solution;

pub use frame::Frame;
pub use solution::{Action, Solution, Status};

use torricelli_core::{CrossSection, DrainParameters, DrainState, Observer};
use tracing::{debug, warn};
use uom::{
    ConstZero,
    si::{
        f64::{Length, Time},
        length::meter,
        time::second,
    },
};

pub use super::euler::Error;

/// One tank inside a lockstep run.
#[derive(Debug, Clone)]
pub struct Lane<G> {
    tank: G,
    state: DrainState,
}

impl<G> Lane<G> {
    #[must_use]
    pub fn tank(&self) -> &G {
        &self.tank
    }

    #[must_use]
    pub fn state(&self) -> &DrainState {
        &self.state
    }
}

/// A lockstep simulation of `N` tanks.
#[derive(Debug, Clone)]
pub struct Lockstep<G, const N: usize> {
    lanes: [Lane<G>; N],
    params: DrainParameters,
    time: Time,
    steps: usize,
    frames: usize,
}

impl<G, const N: usize> Lockstep<G, N>
where
    G: CrossSection,
{
    /// Creates a run in which every tank starts at the parameters' initial height.
    #[must_use]
    pub fn new(tanks: [G; N], params: DrainParameters) -> Self {
        Self {
            lanes: tanks.map(|tank| Lane {
                tank,
                state: DrainState::new(&params),
            }),
            params,
            time: Time::ZERO,
            steps: 0,
            frames: 0,
        }
    }

    #[must_use]
    pub fn lanes(&self) -> &[Lane<G>; N] {
        &self.lanes
    }

    #[must_use]
    pub fn params(&self) -> &DrainParameters {
        &self.params
    }

    /// Returns the shared clock.
    #[must_use]
    pub fn time(&self) -> Time {
        self.time
    }

    /// Returns the number of steps in which at least one tank advanced.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[must_use]
    pub fn heights(&self) -> [Length; N] {
        std::array::from_fn(|i| self.lanes[i].state.height())
    }

    /// Returns `true` once every tank has drained.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.lanes
            .iter()
            .all(|lane| lane.state.is_drained(&self.params))
    }

    /// Returns the time at which each tank drained, or `None` while it drains.
    #[must_use]
    pub fn drain_times(&self) -> [Option<Time>; N] {
        std::array::from_fn(|i| {
            let state = &self.lanes[i].state;
            state.is_drained(&self.params).then(|| state.time())
        })
    }

    /// Returns the current state as a frame.
    #[must_use]
    pub fn frame(&self) -> Frame<N> {
        Frame {
            index: self.frames,
            time: self.time,
            heights: self.heights(),
            finished: self.is_finished(),
        }
    }

    /// Advances every still-draining tank by one time step.
    ///
    /// Returns `Ok(false)` without touching the clock if no tank advanced.
    ///
    /// # Errors
    ///
    /// Returns an error if a geometry reports an invalid area, or if a tank is
    /// still draining after [`DrainParameters::max_steps`] steps.
    pub fn step(&mut self) -> Result<bool, Error> {
        if self.is_finished() {
            return Ok(false);
        }
        if self.steps >= self.params.max_steps() {
            let height = self
                .heights()
                .into_iter()
                .fold(Length::ZERO, |a, b| if b > a { b } else { a });
            warn!(
                steps = self.steps,
                time_s = self.time.get::<second>(),
                height_m = height.get::<meter>(),
                "lockstep run did not drain within the step bound"
            );
            return Err(Error::DidNotConverge {
                steps: self.steps,
                time: self.time,
                height,
            });
        }

        // Lanes are committed together, and only once every lane has stepped.
        let mut staged: [DrainState; N] = std::array::from_fn(|i| self.lanes[i].state);
        let mut advanced = false;
        for (state, lane) in staged.iter_mut().zip(&self.lanes) {
            advanced |= state.advance(&lane.tank, &self.params)?.is_some();
        }

        for (lane_index, (lane, state)) in self.lanes.iter_mut().zip(staged).enumerate() {
            if lane.state.height() > Length::ZERO && state.height() == Length::ZERO {
                debug!(
                    lane = lane_index,
                    drain_time_s = state.time().get::<second>(),
                    "tank drained"
                );
            }
            lane.state = state;
        }

        if advanced {
            self.time += self.params.time_step();
            self.steps += 1;
        }
        Ok(advanced)
    }

    /// Advances up to `steps_per_frame` steps and returns the resulting frame.
    ///
    /// Stops early once no tank advances. A `steps_per_frame` of zero is
    /// treated as one.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Lockstep::step`].
    pub fn advance_frame(&mut self, steps_per_frame: usize) -> Result<Frame<N>, Error> {
        for _ in 0..steps_per_frame.max(1) {
            if !self.step()? {
                break;
            }
        }
        self.frames += 1;
        Ok(self.frame())
    }
}

/// Drains `N` tanks on a shared clock until all are empty.
///
/// The observer receives the initial frame and then one [`Frame`] per batch of
/// `steps_per_frame` steps, and may return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns an error if a geometry reports an invalid area or a tank does not
/// drain within the step bound.
pub fn solve<G, Obs, const N: usize>(
    tanks: [G; N],
    params: DrainParameters,
    steps_per_frame: usize,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    G: CrossSection,
    Obs: Observer<Frame<N>, Action>,
{
    let mut sim = Lockstep::new(tanks, params);
    let mut frames = vec![sim.frame()];

    let mut status = Status::Drained;
    if let Some(Action::StopEarly) = observer.observe(&frames[0]) {
        status = Status::StoppedByObserver;
    }

    while status == Status::Drained && !sim.is_finished() {
        let frame = sim.advance_frame(steps_per_frame)?;
        frames.push(frame);
        if let Some(Action::StopEarly) = observer.observe(&frame) {
            status = Status::StoppedByObserver;
        }
    }

    Ok(Solution {
        status,
        frames,
        drain_times: sim.drain_times(),
    })
}
