use thiserror::Error;
use uom::si::{
    f64::{Acceleration, Area, Length, Time},
    length::meter,
};

use crate::constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive};

/// Raw parameters for a drain run, before validation.
///
/// Build one with [`DrainConfig::new`] and adjust the optional fields with the
/// `with_*` methods, then validate it with [`DrainParameters::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrainConfig {
    /// Gravitational acceleration.
    pub gravity: Acceleration,

    /// Area of the orifice the liquid drains through.
    pub orifice_area: Area,

    /// Fixed integration time step.
    pub time_step: Time,

    /// Liquid height above the orifice at the start of the run.
    pub initial_height: Length,

    /// Height at or below which the tank counts as empty.
    pub empty_height: Length,

    /// Maximum number of steps before a run is reported as not converging.
    pub max_steps: usize,
}

impl DrainConfig {
    /// Default threshold below which the tank counts as empty (one micrometre).
    pub const DEFAULT_EMPTY_HEIGHT_M: f64 = 1e-6;

    /// Default step bound for a single run.
    pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

    /// Creates a config with the default empty threshold and step bound.
    #[must_use]
    pub fn new(
        gravity: Acceleration,
        orifice_area: Area,
        time_step: Time,
        initial_height: Length,
    ) -> Self {
        Self {
            gravity,
            orifice_area,
            time_step,
            initial_height,
            empty_height: Length::new::<meter>(Self::DEFAULT_EMPTY_HEIGHT_M),
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    /// Sets the height at or below which the tank counts as empty.
    #[must_use]
    pub fn with_empty_height(mut self, empty_height: Length) -> Self {
        self.empty_height = empty_height;
        self
    }

    /// Sets the maximum number of steps a run may take.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Replaces the initial height.
    #[must_use]
    pub fn with_initial_height(mut self, initial_height: Length) -> Self {
        self.initial_height = initial_height;
        self
    }
}

/// Errors that can occur when validating a [`DrainConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("invalid gravitational acceleration: {0}")]
    Gravity(#[source] ConstraintError),

    #[error("invalid orifice area: {0}")]
    OrificeArea(#[source] ConstraintError),

    #[error("invalid time step: {0}")]
    TimeStep(#[source] ConstraintError),

    #[error("invalid initial height: {0}")]
    InitialHeight(#[source] ConstraintError),

    #[error("invalid empty height: {0}")]
    EmptyHeight(#[source] ConstraintError),

    #[error("max_steps must be at least one")]
    MaxSteps,
}

/// Validated parameters for a drain run.
///
/// Gravity, orifice area, time step, and the empty threshold are strictly
/// positive and finite; the initial height is non-negative and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrainParameters {
    gravity: Constrained<Acceleration, StrictlyPositive>,
    orifice_area: Constrained<Area, StrictlyPositive>,
    time_step: Constrained<Time, StrictlyPositive>,
    initial_height: Constrained<Length, NonNegative>,
    empty_height: Constrained<Length, StrictlyPositive>,
    max_steps: usize,
}

impl DrainParameters {
    /// Validates a config.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first parameter that violates
    /// its constraint.
    pub fn new(config: DrainConfig) -> Result<Self, ParameterError> {
        let DrainConfig {
            gravity,
            orifice_area,
            time_step,
            initial_height,
            empty_height,
            max_steps,
        } = config;

        if max_steps == 0 {
            return Err(ParameterError::MaxSteps);
        }

        Ok(Self {
            gravity: Constrained::new(gravity).map_err(ParameterError::Gravity)?,
            orifice_area: Constrained::new(orifice_area).map_err(ParameterError::OrificeArea)?,
            time_step: Constrained::new(time_step).map_err(ParameterError::TimeStep)?,
            initial_height: Constrained::new(initial_height)
                .map_err(ParameterError::InitialHeight)?,
            empty_height: Constrained::new(empty_height).map_err(ParameterError::EmptyHeight)?,
            max_steps,
        })
    }

    #[must_use]
    pub fn gravity(&self) -> Acceleration {
        self.gravity.into_inner()
    }

    #[must_use]
    pub fn orifice_area(&self) -> Area {
        self.orifice_area.into_inner()
    }

    #[must_use]
    pub fn time_step(&self) -> Time {
        self.time_step.into_inner()
    }

    #[must_use]
    pub fn initial_height(&self) -> Length {
        self.initial_height.into_inner()
    }

    /// Returns the height at or below which the tank counts as empty.
    #[must_use]
    pub fn empty_height(&self) -> Length {
        self.empty_height.into_inner()
    }

    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

impl TryFrom<DrainConfig> for DrainParameters {
    type Error = ParameterError;

    fn try_from(config: DrainConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}
