//! Outline polygons for drawing conical tanks.
//!
//! Points are `[x, y]` pairs: `x` is the horizontal offset from the drawing's
//! origin and `y` is the height above the orifice. A tank is drawn centred on
//! `center` with its orifice at `y = 0`.

use torricelli_core::{Cone, Orientation};
use uom::{ConstZero, si::f64::Length};

/// A point in the plane of a drawing.
pub type Point = [Length; 2];

/// Returns the open outline of the cone's wall.
///
/// An upright cone is drawn as a `V` with its apex at the orifice; an inverted
/// cone as a `Λ` standing on its base.
#[must_use]
pub fn tank_outline(cone: &Cone, center: Length) -> [Point; 3] {
    let (h, r) = (cone.height(), cone.radius());
    match cone.orientation() {
        Orientation::Upright => [
            [center - r, h],
            [center, Length::ZERO],
            [center + r, h],
        ],
        Orientation::Inverted => [
            [center - r, Length::ZERO],
            [center, h],
            [center + r, Length::ZERO],
        ],
    }
}

/// Returns the closed outline of the liquid standing at `level`.
///
/// Empty when `level` is at or below `empty_height`.
#[must_use]
pub fn water_outline(
    cone: &Cone,
    center: Length,
    level: Length,
    empty_height: Length,
) -> Vec<Point> {
    if level <= empty_height {
        return Vec::new();
    }

    let top = cone.radius_at(level);
    match cone.orientation() {
        Orientation::Upright => vec![
            [center, Length::ZERO],
            [center - top, level],
            [center + top, level],
        ],
        Orientation::Inverted => {
            let bottom = cone.radius_at(Length::ZERO);
            vec![
                [center - bottom, Length::ZERO],
                [center + bottom, Length::ZERO],
                [center + top, level],
                [center - top, level],
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::centimeter;

    fn cm(value: f64) -> Length {
        Length::new::<centimeter>(value)
    }

    fn cone(orientation: Orientation) -> Cone {
        Cone::new(cm(50.0), cm(30.0), orientation).unwrap()
    }

    #[test]
    fn outlines_are_mirror_images() {
        let up = tank_outline(&cone(Orientation::Upright), cm(-36.0));
        let down = tank_outline(&cone(Orientation::Inverted), cm(36.0));

        assert_eq!(up[1], [cm(-36.0), Length::ZERO]);
        assert_eq!(down[1], [cm(36.0), cm(50.0)]);
        assert_eq!(up[0][1], cm(50.0));
        assert_eq!(down[0][1], Length::ZERO);
    }

    #[test]
    fn upright_water_is_a_triangle_from_the_apex() {
        let water = water_outline(&cone(Orientation::Upright), Length::ZERO, cm(25.0), cm(1e-4));

        assert_eq!(water.len(), 3);
        assert_eq!(water[0], [Length::ZERO, Length::ZERO]);
        assert_relative_eq!(water[2][0].get::<centimeter>(), 15.0, max_relative = 1e-12);
        assert_eq!(water[2][1], cm(25.0));
    }

    #[test]
    fn inverted_water_is_a_trapezoid_on_the_base() {
        let water = water_outline(&cone(Orientation::Inverted), Length::ZERO, cm(25.0), cm(1e-4));

        assert_eq!(water.len(), 4);
        assert_relative_eq!(water[1][0].get::<centimeter>(), 30.0, max_relative = 1e-12);
        assert_relative_eq!(water[2][0].get::<centimeter>(), 15.0, max_relative = 1e-12);
    }

    #[test]
    fn drained_tank_has_no_water() {
        let cone = cone(Orientation::Upright);
        let water = water_outline(&cone, Length::ZERO, Length::ZERO, cm(1e-4));
        assert!(water.is_empty());
    }
}
