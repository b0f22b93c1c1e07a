use std::fmt;

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Time},
    length::meter,
    time::minute,
};

/// Parameters and outcome of a single-tank run, as shown beside its plot.
///
/// Displays as four lines:
///
/// ```text
/// Initial height: 1 m
/// Tank area: 0.05 m²
/// Hole area: 0.0003 m²
/// Total drain time: 1.25 min
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrainSummary {
    pub initial_height: Length,
    pub tank_area: Area,
    pub orifice_area: Area,
    pub drain_time: Time,
}

impl DrainSummary {
    /// Returns the drain time in minutes, rounded to two decimal places.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        (self.drain_time.get::<minute>() * 100.0).round() / 100.0
    }
}

impl fmt::Display for DrainSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial height: {} m", self.initial_height.get::<meter>())?;
        writeln!(f, "Tank area: {} m²", self.tank_area.get::<square_meter>())?;
        writeln!(f, "Hole area: {} m²", self.orifice_area.get::<square_meter>())?;
        write!(f, "Total drain time: {} min", self.minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::time::second;

    #[test]
    fn displays_parameters_and_rounded_minutes() {
        let summary = DrainSummary {
            initial_height: Length::new::<meter>(1.0),
            tank_area: Area::new::<square_meter>(0.05),
            orifice_area: Area::new::<square_meter>(0.0003),
            drain_time: Time::new::<second>(74.9),
        };

        assert_eq!(
            summary.to_string(),
            "Initial height: 1 m\n\
             Tank area: 0.05 m²\n\
             Hole area: 0.0003 m²\n\
             Total drain time: 1.25 min"
        );
    }
}
