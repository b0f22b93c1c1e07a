//! Batch runs over many tank configurations.
//!
//! Each [`Case`] describes one prismatic tank. [`run`] drains every case to
//! completion and collects the results in a [`Report`]. A case that fails
//! (invalid parameters, invalid geometry, or no convergence) records its error
//! on its own [`Row`] and the sweep moves on to the next case.

mod case;
mod report;

pub use case::{Case, ramp};
pub use report::{Report, Row, RowError};

use torricelli_core::{DrainConfig, DrainParameters, TankGeometry};
use tracing::{debug, info, warn};
use uom::{
    ConstZero,
    si::{
        acceleration::meter_per_second_squared,
        f64::{Acceleration, Length, Time},
        length::meter,
        time::second,
    },
};

use crate::transient::euler;

/// Settings shared by every case in a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub gravity: Acceleration,
    pub time_step: Time,
    pub empty_height: Length,
    pub max_steps: usize,
}

impl Default for Config {
    /// Standard gravity of 9.81 m/s² and a 0.1 s step.
    fn default() -> Self {
        Self {
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            time_step: Time::new::<second>(0.1),
            empty_height: Length::new::<meter>(DrainConfig::DEFAULT_EMPTY_HEIGHT_M),
            max_steps: DrainConfig::DEFAULT_MAX_STEPS,
        }
    }
}

/// Drains every case and reports the outcome of each.
pub fn run<I>(cases: I, config: &Config) -> Report
where
    I: IntoIterator<Item = Case>,
{
    let rows: Vec<Row> = cases
        .into_iter()
        .map(|case| {
            let outcome = drain(&case, config);
            match &outcome {
                Ok(time) => {
                    debug!(id = case.id, drain_time_s = time.get::<second>(), "case drained");
                }
                Err(err) => warn!(id = case.id, error = %err, "case failed"),
            }
            Row { case, outcome }
        })
        .collect();

    let report = Report { rows };
    info!(
        cases = report.rows.len(),
        failed = report.failures().count(),
        "sweep complete"
    );
    report
}

/// Drains a single case and returns its total drain time.
fn drain(case: &Case, config: &Config) -> Result<Time, RowError> {
    let tank = TankGeometry::constant(case.tank_area).map_err(RowError::Geometry)?;
    let params = DrainParameters::new(
        DrainConfig::new(
            config.gravity,
            case.orifice_area,
            config.time_step,
            case.initial_height,
        )
        .with_empty_height(config.empty_height)
        .with_max_steps(config.max_steps),
    )?;

    let solution = euler::solve_unobserved(&tank, &params)?;
    Ok(solution.drain_time().unwrap_or(Time::ZERO))
}
