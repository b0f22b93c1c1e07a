//! Prints the reference 50-case drain-time table.
//!
//! Cases 31 and later have a non-positive hole area; they are listed with
//! the reason they failed instead of a drain time.
//!
//! # Usage
//!
//! ```text
//! cargo run --example table
//! RUST_LOG=debug cargo run --example table
//! ```

use torricelli_solvers::sweep::{self, Config};
use tracing_subscriber::{EnvFilter, fmt};
use uom::si::{area::square_meter, length::meter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let report = sweep::run(sweep::ramp(50), &Config::default());

    println!(
        "{:>4}  {:>8}  {:>10}  {:>10}  {:>18}",
        "ID", "h0 (m)", "A_tank (m²)", "A_hole (m²)", "Drain time (min)"
    );
    for row in &report.rows {
        let case = &row.case;
        let time = match (row.drain_minutes(), &row.outcome) {
            (_, Err(err)) => format!("failed: {err}"),
            (minutes, Ok(_)) => format!("{:.2}", minutes.unwrap_or_default()),
        };
        println!(
            "{:>4}  {:>8.2}  {:>10.3}  {:>10.5}  {:>18}",
            case.id,
            case.initial_height.get::<meter>(),
            case.tank_area.get::<square_meter>(),
            case.orifice_area.get::<square_meter>(),
            time,
        );
    }

    let failed = report.failures().count();
    if failed > 0 {
        println!("\n{failed} of {} cases failed.", report.rows.len());
    }
}
