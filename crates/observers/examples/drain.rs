//! Interactive visualizations of draining tanks.
//!
//! # Usage
//!
//! ```text
//! cargo run --example drain --features plot -- plot
//! cargo run --example drain --features plot -- plot 0.5
//! cargo run --example drain --features plot -- phase
//! cargo run --example drain --features plot -- animate
//! ```
//!
//! # Modes
//!
//! - **plot [dt]**: Drain a 0.05 m² tank from 1 m through a 3 cm² hole and
//!   plot water height against time, annotated with the run's parameters and
//!   total drain time. The default step is 0.1 s.
//!
//! - **phase**: Phase portrait (h against dh/dt) of a wide 1 m² tank drained
//!   through a 0.5 cm² hole over the first 50 seconds, from four starting
//!   heights, over the normalized direction field of the rate law.
//!
//! - **animate**: An upright and an inverted cone (50 cm tall, 30 cm rim, 1 cm
//!   hole) drained side by side on a shared clock, 50 steps per frame.

use std::{error::Error, f64::consts::PI};

use torricelli_core::{
    Cone, DrainConfig, DrainParameters, Observer, Orientation, TankGeometry, physics,
};
use torricelli_observers::{Animation, DrainSummary, PlotObserver, ShowConfig, StopAfter};
use torricelli_solvers::transient::euler;
use tracing_subscriber::{EnvFilter, fmt};
use uom::{
    ConstZero,
    si::{
        acceleration::{centimeter_per_second_squared, meter_per_second_squared},
        area::{square_centimeter, square_meter},
        f64::{Acceleration, Area, Length, Time},
        length::{centimeter, meter},
        time::second,
        velocity::meter_per_second,
    },
};

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "plot".into());
    match mode.as_str() {
        "plot" => {
            let dt = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid step size: expected a number, e.g. 0.1");
                    std::process::exit(1);
                })
                .unwrap_or(0.1);
            plot(dt)
        }
        "phase" => phase(),
        "animate" => animate(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: drain [plot [dt]|phase|animate]");
            std::process::exit(1);
        }
    }
}

fn gravity() -> Acceleration {
    Acceleration::new::<meter_per_second_squared>(9.81)
}

// --- Plot --------------------------------------------------------------------

fn plot(dt: f64) -> Result<(), Box<dyn Error>> {
    let tank_area = Area::new::<square_meter>(0.05);
    let tank = TankGeometry::constant(tank_area)?;
    let params = DrainParameters::new(DrainConfig::new(
        gravity(),
        Area::new::<square_meter>(0.0003),
        Time::new::<second>(dt),
        Length::new::<meter>(1.0),
    ))?;

    let mut obs = PlotObserver::<1>::new(["Water height"]);
    let solution = euler::solve(&tank, &params, &mut obs)?;

    let summary = DrainSummary {
        initial_height: params.initial_height(),
        tank_area,
        orifice_area: params.orifice_area(),
        drain_time: solution.drain_time().unwrap_or(Time::ZERO),
    };
    println!("{summary}");

    obs.show(
        ShowConfig::new()
            .title("Water Height vs Time (Tank Draining Simulation)")
            .x_label("Time (minutes)")
            .y_label("Water Height (m)")
            .annotation(summary.to_string()),
    )?;

    Ok(())
}

// --- Phase -------------------------------------------------------------------

fn phase() -> Result<(), Box<dyn Error>> {
    const STARTS: [f64; 4] = [2.0, 1.5, 1.0, 0.5];

    let tank_area = Area::new::<square_meter>(1.0);
    let tank = TankGeometry::constant(tank_area)?;
    let orifice_area = Area::new::<square_centimeter>(0.5);
    let rate_at = |h: f64| {
        physics::height_rate(gravity(), orifice_area, tank_area, Length::new::<meter>(h))
            .get::<meter_per_second>()
    };
    let mut obs = PlotObserver::<4>::new(["h(0)=2 m", "h(0)=1.5 m", "h(0)=1 m", "h(0)=0.5 m"]);

    // Direction field on a 20 × 20 grid over h ∈ [0, 2.5] m, each arrow
    // pointing along the normalized (1, dh/dt).
    let grid: Vec<f64> = (0..20_u32).map(|i| 2.5 * f64::from(i) / 19.0).collect();
    for &h in &grid {
        for &row in &grid {
            let rate = rate_at(row);
            let norm = (1.0 + rate * rate).sqrt();
            obs.arrow([h, rate], [h + 0.1 / norm, rate + 0.1 * rate / norm]);
        }
    }

    for (slot, h0) in STARTS.into_iter().enumerate() {
        let params = DrainParameters::new(DrainConfig::new(
            gravity(),
            orifice_area,
            Time::new::<second>(0.1),
            Length::new::<meter>(h0),
        ))?;
        let mut stop = StopAfter::new(Time::new::<second>(50.0));

        euler::solve(&tank, &params, |event: &euler::Event| -> Option<euler::Action> {
            let height = event.sample.height.get::<meter>();
            let mut traces = [None; 4];
            traces[slot] = Some(rate_at(height));
            obs.record(height, traces);
            stop.observe(event)
        })?;
    }

    obs.show(
        ShowConfig::new()
            .title("Phase Space of Torricelli's Law (h vs dh/dt)")
            .x_label("Height h(t) (m)")
            .y_label("Velocity dh/dt (m/s)")
            .legend(),
    )?;

    Ok(())
}

// --- Animate -----------------------------------------------------------------

fn animate() -> Result<(), Box<dyn Error>> {
    let cone = |orientation| {
        Cone::new(
            Length::new::<centimeter>(50.0),
            Length::new::<centimeter>(30.0),
            orientation,
        )
    };
    let params = DrainParameters::new(DrainConfig::new(
        Acceleration::new::<centimeter_per_second_squared>(980.0),
        Area::new::<square_centimeter>(PI * 0.5 * 0.5),
        Time::new::<second>(0.01),
        Length::new::<centimeter>(50.0),
    ))?;

    Animation::new(
        [cone(Orientation::Upright)?, cone(Orientation::Inverted)?],
        ["Upright", "Inverted"],
        params,
    )
    .show("Torricelli's Law: Conical Tank Drainage Simulation")?;

    Ok(())
}
