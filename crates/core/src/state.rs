use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{Area, Length, Time, Velocity},
        length::meter,
        time::minute,
    },
};

use crate::{CrossSection, DrainParameters, physics};

/// A single point of a drain trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Elapsed simulated time since the start of the run.
    pub time: Time,

    /// Liquid height above the orifice.
    pub height: Length,
}

impl Sample {
    /// Returns the elapsed time in minutes.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.time.get::<minute>()
    }
}

/// The result of one accepted integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// State after the step.
    pub sample: Sample,

    /// The rate `dh/dt`, evaluated at the start of the step, that produced it.
    pub rate: Velocity,
}

/// Errors raised while stepping a [`DrainState`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepError {
    #[error(
        "tank geometry returned an invalid area of {} m² at a height of {} m",
        .area.get::<square_meter>(),
        .height.get::<meter>()
    )]
    InvalidArea { height: Length, area: Area },
}

/// The mutable state of one draining tank.
///
/// Height never increases and time grows by exactly one time step for every
/// accepted [`advance`](DrainState::advance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrainState {
    time: Time,
    height: Length,
}

impl DrainState {
    /// Creates the state at the start of a run.
    ///
    /// An initial height at or below the empty threshold is stored as exactly
    /// zero.
    #[must_use]
    pub fn new(params: &DrainParameters) -> Self {
        let height = params.initial_height();
        Self {
            time: Time::ZERO,
            height: if height <= params.empty_height() {
                Length::ZERO
            } else {
                height
            },
        }
    }

    #[must_use]
    pub fn time(&self) -> Time {
        self.time
    }

    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }

    #[must_use]
    pub fn sample(&self) -> Sample {
        Sample {
            time: self.time,
            height: self.height,
        }
    }

    /// Returns `true` once the level is at or below the empty threshold.
    #[must_use]
    pub fn is_drained(&self, params: &DrainParameters) -> bool {
        self.height <= params.empty_height()
    }

    /// Advances the state by one forward Euler step.
    ///
    /// Returns `Ok(None)` without advancing time if the tank is already
    /// drained; the height is then exactly zero. Otherwise the level falls by
    /// `dh/dt · dt`, and a result at or below the empty threshold is stored as
    /// exactly zero.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::InvalidArea`] if `tank` reports a negative or NaN
    /// cross-sectional area at the current height.
    pub fn advance<G>(
        &mut self,
        tank: &G,
        params: &DrainParameters,
    ) -> Result<Option<Step>, StepError>
    where
        G: CrossSection + ?Sized,
    {
        if self.is_drained(params) {
            self.height = Length::ZERO;
            return Ok(None);
        }

        let area = tank.area(self.height);
        if area.is_nan() || area < Area::ZERO {
            return Err(StepError::InvalidArea {
                height: self.height,
                area,
            });
        }

        let rate = physics::height_rate(
            params.gravity(),
            params.orifice_area(),
            area,
            self.height,
        );
        let next = self.height + rate * params.time_step();

        self.height = if next <= params.empty_height() {
            Length::ZERO
        } else {
            next
        };
        self.time += params.time_step();

        Ok(Some(Step {
            sample: self.sample(),
            rate,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        acceleration::meter_per_second_squared, f64::Acceleration, time::second,
        velocity::meter_per_second,
    };

    use crate::{DrainConfig, TankGeometry};

    fn params(h0: f64) -> DrainParameters {
        DrainParameters::new(DrainConfig::new(
            Acceleration::new::<meter_per_second_squared>(9.81),
            Area::new::<square_meter>(3e-4),
            Time::new::<second>(0.1),
            Length::new::<meter>(h0),
        ))
        .unwrap()
    }

    fn tank() -> TankGeometry {
        TankGeometry::constant(Area::new::<square_meter>(0.05)).unwrap()
    }

    struct Leaky;

    impl CrossSection for Leaky {
        fn area(&self, _height: Length) -> Area {
            Area::new::<square_meter>(-1.0)
        }
    }

    #[test]
    fn one_step_follows_forward_euler() {
        let params = params(1.0);
        let mut state = DrainState::new(&params);

        let step = state.advance(&tank(), &params).unwrap().unwrap();

        let rate = -(3e-4 / 0.05) * (2.0 * 9.81_f64).sqrt();
        assert_relative_eq!(step.rate.get::<meter_per_second>(), rate, max_relative = 1e-12);
        assert_relative_eq!(
            step.sample.height.get::<meter>(),
            1.0 + rate * 0.1,
            max_relative = 1e-12
        );
        assert_relative_eq!(step.sample.time.get::<second>(), 0.1);
        assert_eq!(step.sample, state.sample());
    }

    #[test]
    fn last_step_lands_exactly_on_zero() {
        // A level this low empties within one step.
        let params = params(2e-6);
        let mut state = DrainState::new(&params);

        let step = state.advance(&tank(), &params).unwrap().unwrap();

        assert_eq!(step.sample.height, Length::ZERO);
        assert!(state.is_drained(&params));
    }

    #[test]
    fn drained_tank_does_not_advance() {
        let params = params(0.0);
        let mut state = DrainState::new(&params);

        assert_eq!(state.advance(&tank(), &params), Ok(None));
        assert_eq!(state.time(), Time::ZERO);
        assert_eq!(state.height(), Length::ZERO);
    }

    #[test]
    fn initial_height_below_threshold_is_zero() {
        let params = params(5e-7);
        let state = DrainState::new(&params);

        assert_eq!(state.height(), Length::ZERO);
    }

    #[test]
    fn negative_area_is_an_error() {
        let params = params(1.0);
        let mut state = DrainState::new(&params);

        let err = state.advance(&Leaky, &params).unwrap_err();

        assert!(matches!(err, StepError::InvalidArea { .. }));
        assert_eq!(state.time(), Time::ZERO, "state is untouched on error");
    }
}
