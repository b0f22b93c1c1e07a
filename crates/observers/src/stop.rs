use torricelli_core::Observer;
use uom::si::f64::Time;

use crate::traits::{CanStopEarly, HasTime};

/// An observer that stops a run once simulated time reaches a horizon.
///
/// Use it to integrate over a fixed window `t ∈ [0, T]` rather than until the
/// tank is empty. The run stops on the first event whose time is at or past
/// the horizon, so with a step of `dt` the last sample lies in
/// `[T, T + dt)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAfter {
    horizon: Time,
}

impl StopAfter {
    #[must_use]
    pub fn new(horizon: Time) -> Self {
        Self { horizon }
    }

    #[must_use]
    pub fn horizon(&self) -> Time {
        self.horizon
    }
}

impl<E, A> Observer<E, A> for StopAfter
where
    E: HasTime,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.time() >= self.horizon).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use torricelli_core::{
        Cone, DrainConfig, DrainParameters, Orientation, TankGeometry, physics,
    };
    use torricelli_solvers::transient::{euler, lockstep};
    use uom::si::{
        acceleration::{centimeter_per_second_squared, meter_per_second_squared},
        area::{square_centimeter, square_meter},
        f64::{Acceleration, Area, Length},
        length::{centimeter, meter},
        time::second,
        velocity::meter_per_second,
    };

    #[test]
    fn fixed_window_over_a_wide_tank() {
        let tank = TankGeometry::constant(Area::new::<square_meter>(1.0)).unwrap();
        let params = DrainParameters::new(DrainConfig::new(
            Acceleration::new::<meter_per_second_squared>(9.81),
            Area::new::<square_meter>(5e-5),
            Time::new::<second>(0.1),
            Length::new::<meter>(2.0),
        ))
        .unwrap();

        let mut stop = StopAfter::new(Time::new::<second>(50.0));
        let mut rates = Vec::new();
        let observer = |event: &euler::Event| -> Option<euler::Action> {
            rates.extend(event.rate);
            stop.observe(event)
        };
        let solution = euler::solve(&tank, &params, observer).unwrap();

        assert_eq!(solution.status, euler::Status::StoppedByObserver);
        let end = solution.drain_time().unwrap().get::<second>();
        assert!((50.0..50.1).contains(&end), "stopped at {end} s");

        for (pair, rate) in solution.history.windows(2).zip(rates) {
            assert!(pair[1].height < pair[0].height);
            let expected = physics::height_rate(
                params.gravity(),
                params.orifice_area(),
                Area::new::<square_meter>(1.0),
                pair[0].height,
            );
            assert_relative_eq!(
                rate.get::<meter_per_second>(),
                -(5e-5 / 1.0) * (2.0 * 9.81 * pair[0].height.get::<meter>()).sqrt(),
                max_relative = 1e-12
            );
            assert_eq!(rate, expected);
        }
    }

    #[test]
    fn stops_a_lockstep_run() {
        let cone = |orientation| {
            Cone::new(
                Length::new::<centimeter>(50.0),
                Length::new::<centimeter>(30.0),
                orientation,
            )
            .unwrap()
        };
        let params = DrainParameters::new(DrainConfig::new(
            Acceleration::new::<centimeter_per_second_squared>(980.0),
            Area::new::<square_centimeter>(std::f64::consts::PI * 0.25),
            Time::new::<second>(0.01),
            Length::new::<centimeter>(50.0),
        ))
        .unwrap();

        let solution = lockstep::solve(
            [cone(Orientation::Upright), cone(Orientation::Inverted)],
            params,
            50,
            StopAfter::new(Time::new::<second>(10.0)),
        )
        .unwrap();

        assert_eq!(solution.status, lockstep::Status::StoppedByObserver);
        let last = solution.frames.last().unwrap();
        assert!(last.time >= Time::new::<second>(10.0));
        assert!(!last.finished);
    }
}
