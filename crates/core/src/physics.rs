//! Torricelli's law and the resulting rate of change of the liquid level.

use uom::{
    ConstZero,
    si::f64::{Acceleration, Area, Length, Velocity},
};

/// Returns the efflux velocity `sqrt(2·g·h)` through an orifice `height` below
/// the free surface.
///
/// Zero for non-positive heights.
#[must_use]
pub fn efflux_velocity(gravity: Acceleration, height: Length) -> Velocity {
    if height <= Length::ZERO {
        return Velocity::ZERO;
    }
    (2.0 * gravity * height).sqrt()
}

/// Returns `dh/dt` for a tank of cross-section `tank_area` draining through
/// `orifice_area`.
///
/// The level falls at `(A_hole / A_tank)·v`. When the tank is no wider than the
/// orifice the ratio would exceed one, so the level instead falls at the efflux
/// velocity itself. The result is never positive.
#[must_use]
pub fn height_rate(
    gravity: Acceleration,
    orifice_area: Area,
    tank_area: Area,
    height: Length,
) -> Velocity {
    let velocity = efflux_velocity(gravity, height);
    if tank_area <= orifice_area {
        -velocity
    } else {
        -(orifice_area / tank_area) * velocity
    }
}
