use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

/// One tank configuration in a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    /// Identifier reported alongside the result.
    pub id: usize,
    pub initial_height: Length,
    pub tank_area: Area,
    pub orifice_area: Area,
}

/// Returns the reference sweep of `count` cases with ids `1..=count`.
///
/// Each case is slower to drain than the one before it:
///
/// ```text
/// h0     = 0.5     + 0.05    · (id − 1)  m
/// A_tank = 0.05    + 0.002   · (id − 1)  m²
/// A_hole = 0.0003  − 0.00001 · (id − 1)  m²
/// ```
///
/// From id 31 on the hole area is no longer positive, so those cases fail
/// validation when run.
pub fn ramp(count: usize) -> impl Iterator<Item = Case> {
    (1..=count).map(|id| {
        #[allow(clippy::cast_precision_loss)]
        let n = (id - 1) as f64;
        Case {
            id,
            initial_height: Length::new::<meter>(0.5 + 0.05 * n),
            tank_area: Area::new::<square_meter>(0.05 + 0.002 * n),
            orifice_area: Area::new::<square_meter>(0.0003 - 0.00001 * n),
        }
    })
}
