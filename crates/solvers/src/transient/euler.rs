//! Forward Euler solver for a single draining tank.
//!
//! Each step lowers the level by the Torricelli rate evaluated at the start of
//! the step:
//!
//! ```text
//! h_{n+1} = h_n + (dh/dt)(h_n) * dt
//! t_{n+1} = t_n + dt
//! ```
//!
//! A run ends on the first step whose height is exactly zero, or fails with
//! [`Error::DidNotConverge`] once the parameters' step bound is used up.
//!
//! # Example
//!
//! ```ignore
//! use torricelli_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&tank, &params)?;
//!
//! for sample in &solution.history {
//!     println!("t={:?}: h={:?}", sample.time, sample.height);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;
mod trajectory;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use trajectory::Trajectory;

use torricelli_core::{CrossSection, DrainParameters, Observer};
use tracing::{debug, warn};
use uom::si::{length::meter, time::second};

/// Returns a lazy trajectory of drain events for `tank`.
///
/// See [`Trajectory`] for the sequence it yields.
pub fn trajectory<'a, G>(tank: &'a G, params: &'a DrainParameters) -> Trajectory<'a, G>
where
    G: CrossSection + ?Sized,
{
    Trajectory::new(tank, params)
}

/// Drains a tank using forward Euler.
///
/// # Algorithm
///
/// 1. Emit the initial sample as step 0.
/// 2. For each step:
///    - Look up the cross-sectional area at the current height.
///    - Compute `dh/dt` from Torricelli's law.
///    - Step the height forward, clamping to exactly zero at the empty threshold.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution once the height reaches zero.
///
/// # Observer
///
/// The observer receives an [`Event`] for every sample, including the initial
/// one, and may return [`Action::StopEarly`] to end the run early.
///
/// # Errors
///
/// Returns an error if the geometry reports an invalid area or the tank does
/// not drain within [`DrainParameters::max_steps`] steps.
pub fn solve<G, Obs>(
    tank: &G,
    params: &DrainParameters,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    G: CrossSection + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut history = Vec::new();
    let mut steps = 0;

    for event in trajectory(tank, params) {
        let event = event.inspect_err(|err| {
            if let Error::DidNotConverge { steps, time, height } = err {
                warn!(
                    steps,
                    time_s = time.get::<second>(),
                    height_m = height.get::<meter>(),
                    "tank did not drain within the step bound"
                );
            }
        })?;

        history.push(event.sample);
        steps = event.step;

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps,
            });
        }
    }

    debug!(
        steps,
        drain_time_s = history.last().map(|s| s.time.get::<second>()),
        "tank drained"
    );

    Ok(Solution {
        status: Status::Drained,
        history,
        steps,
    })
}

/// Drains a tank using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the geometry reports an invalid area or the tank does
/// not drain within the step bound.
pub fn solve_unobserved<G>(tank: &G, params: &DrainParameters) -> Result<Solution, Error>
where
    G: CrossSection + ?Sized,
{
    solve(tank, params, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use torricelli_core::{DrainConfig, TankGeometry, physics};
    use uom::{
        ConstZero,
        si::{
            acceleration::meter_per_second_squared,
            area::square_meter,
            f64::{Acceleration, Area, Length, Time},
            time::minute,
            velocity::meter_per_second,
        },
    };

    // --- Test fixtures ---

    fn constant_tank(area_m2: f64) -> TankGeometry {
        TankGeometry::constant(Area::new::<square_meter>(area_m2)).unwrap()
    }

    fn config(orifice_m2: f64, dt_s: f64, h0_m: f64) -> DrainConfig {
        DrainConfig::new(
            Acceleration::new::<meter_per_second_squared>(9.81),
            Area::new::<square_meter>(orifice_m2),
            Time::new::<second>(dt_s),
            Length::new::<meter>(h0_m),
        )
    }

    fn params(orifice_m2: f64, dt_s: f64, h0_m: f64) -> DrainParameters {
        DrainParameters::new(config(orifice_m2, dt_s, h0_m)).unwrap()
    }

    /// Drain time for a prismatic tank from the exact solution of the ODE.
    fn exact_drain_time(tank_m2: f64, orifice_m2: f64, h0_m: f64) -> f64 {
        (tank_m2 / orifice_m2) * (2.0 * h0_m / 9.81).sqrt()
    }

    struct Leaky;

    impl CrossSection for Leaky {
        fn area(&self, _height: Length) -> Area {
            Area::new::<square_meter>(f64::NAN)
        }
    }

    // --- Tests ---

    #[test]
    fn reference_tank_drains_in_about_a_minute_and_a_quarter() {
        let tank = constant_tank(0.05);
        let params = params(0.0003, 0.1, 1.0);

        let solution = solve_unobserved(&tank, &params).expect("should drain");
        let drain_time = solution.drain_time().unwrap();

        assert_eq!(solution.status, Status::Drained);
        assert_eq!(solution.history.len(), solution.steps + 1);
        assert_relative_eq!(
            drain_time.get::<second>(),
            exact_drain_time(0.05, 0.0003, 1.0),
            epsilon = 1.0
        );
        assert_relative_eq!(drain_time.get::<minute>(), 1.25, epsilon = 0.01);
    }

    #[test]
    fn heights_never_increase_and_end_at_exactly_zero() {
        let tank = constant_tank(0.05);
        let params = params(0.0003, 0.1, 1.0);

        let solution = solve_unobserved(&tank, &params).unwrap();

        assert_relative_eq!(solution.history[0].height.get::<meter>(), 1.0);
        assert_eq!(solution.history[0].time, Time::ZERO);
        for pair in solution.history.windows(2) {
            assert!(pair[1].height <= pair[0].height);
            assert!(pair[1].time > pair[0].time);
        }
        assert_eq!(solution.final_sample().unwrap().height, Length::ZERO);
        assert!(
            solution.history[..solution.steps]
                .iter()
                .all(|s| s.height > Length::ZERO),
            "only the last sample is empty"
        );
    }

    #[test]
    fn taller_start_never_drains_sooner() {
        let tank = constant_tank(0.05);
        let times: Vec<f64> = [0.25, 0.5, 1.0, 1.5, 2.0]
            .into_iter()
            .map(|h0| {
                let solution = solve_unobserved(&tank, &params(0.0003, 0.1, h0)).unwrap();
                solution.drain_time().unwrap().get::<second>()
            })
            .collect();

        assert!(times.windows(2).all(|t| t[1] >= t[0]), "{times:?}");
    }

    #[test]
    fn larger_orifice_never_drains_slower() {
        let tank = constant_tank(0.05);
        let times: Vec<f64> = [1e-4, 2e-4, 3e-4, 6e-4, 1e-3]
            .into_iter()
            .map(|hole| {
                let solution = solve_unobserved(&tank, &params(hole, 0.1, 1.0)).unwrap();
                solution.drain_time().unwrap().get::<second>()
            })
            .collect();

        assert!(times.windows(2).all(|t| t[1] <= t[0]), "{times:?}");
    }

    #[test]
    fn fixed_window_matches_ratio_form_at_every_sample() {
        let tank = constant_tank(1.0);
        let params = params(5e-5, 0.1, 2.0);

        let mut events = Vec::new();
        let solution = solve(&tank, &params, |event: &Event| {
            events.push(*event);
            (event.step >= 500).then_some(Action::StopEarly)
        })
        .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 500);
        assert_relative_eq!(solution.drain_time().unwrap().get::<second>(), 50.0, epsilon = 1e-9);

        for pair in events.windows(2) {
            let (prev, next) = (pair[0].sample, pair[1].sample);
            assert!(next.height < prev.height, "strictly decreasing");

            let expected = -(5e-5 / 1.0) * (2.0 * 9.81 * prev.height.get::<meter>()).sqrt();
            let rate = pair[1].rate.unwrap().get::<meter_per_second>();
            assert_relative_eq!(rate, expected, max_relative = 1e-12);

            let slope = (next.height - prev.height).get::<meter>() / 0.1;
            assert_relative_eq!(slope, expected, max_relative = 1e-9);
        }

        // Exact solution: h(t) = (sqrt(h0) - (a/A)·sqrt(g/2)·t)².
        let exact = (2.0_f64.sqrt() - 5e-5 * (9.81_f64 / 2.0).sqrt() * 50.0).powi(2);
        assert_relative_eq!(
            solution.final_sample().unwrap().height.get::<meter>(),
            exact,
            epsilon = 1e-6
        );
    }

    #[test]
    fn rates_match_physics_module() {
        let tank = constant_tank(0.05);
        let params = params(0.0003, 0.1, 1.0);

        let events: Vec<Event> = trajectory(&tank, &params)
            .take(4)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(events[0].rate, None);
        for pair in events.windows(2) {
            let expected = physics::height_rate(
                params.gravity(),
                params.orifice_area(),
                tank.area(pair[0].sample.height),
                pair[0].sample.height,
            );
            assert_eq!(pair[1].rate, Some(expected));
        }
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let tank = constant_tank(0.05);
        let params = params(0.0003, 0.1, 1e-3);

        let mut step_values = Vec::new();
        let solution = solve(&tank, &params, |event: &Event| {
            step_values.push(event.step);
            None
        })
        .unwrap();

        assert_eq!(step_values, (0..=solution.steps).collect::<Vec<_>>());
    }

    #[test]
    fn empty_tank_returns_initial_sample() {
        let tank = constant_tank(0.05);
        let params = params(0.0003, 0.1, 0.0);

        let solution = solve_unobserved(&tank, &params).unwrap();

        assert_eq!(solution.status, Status::Drained);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
        assert_eq!(solution.drain_time(), Some(Time::ZERO));
    }

    #[test]
    fn step_bound_is_reported() {
        let tank = constant_tank(0.05);
        let params = DrainParameters::new(config(0.0003, 0.1, 1.0).with_max_steps(10)).unwrap();

        let err = solve_unobserved(&tank, &params).unwrap_err();

        match err {
            Error::DidNotConverge {
                steps,
                time,
                height,
            } => {
                assert_eq!(steps, 10);
                assert_relative_eq!(time.get::<second>(), 1.0, epsilon = 1e-9);
                assert!(height > Length::ZERO);
            }
            Error::Step(_) => panic!("expected DidNotConverge, got {err}"),
        }
    }

    #[test]
    fn invalid_area_is_reported() {
        let params = params(0.0003, 0.1, 1.0);

        let err = solve_unobserved(&Leaky, &params).unwrap_err();

        assert!(matches!(err, Error::Step(_)));
    }

    #[test]
    fn reruns_are_identical() {
        let tank = constant_tank(0.05);
        let params = params(0.0003, 0.1, 1.0);

        let first = solve_unobserved(&tank, &params).unwrap();
        let rerun = solve_unobserved(&tank, &params).unwrap();

        assert_eq!(first, rerun);
    }
}
