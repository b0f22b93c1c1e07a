//! Tank shapes, described by their horizontal cross-section at a given level.

use std::f64::consts::PI;

use uom::{
    ConstZero,
    si::f64::{Area, Length},
};

use crate::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// The capability "cross-sectional area at height `h`".
///
/// Heights are measured upward from the orifice. Implementations must return a
/// non-negative area for every height; the integrator reports an error if one
/// does not.
pub trait CrossSection {
    /// Returns the horizontal cross-sectional area of the tank at `height`.
    fn area(&self, height: Length) -> Area;
}

impl<T: CrossSection + ?Sized> CrossSection for &T {
    fn area(&self, height: Length) -> Area {
        (**self).area(height)
    }
}

/// The tank shapes provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum TankGeometry {
    /// A prismatic tank whose area does not depend on the level.
    Constant {
        area: Constrained<Area, StrictlyPositive>,
    },
    /// A right circular cone, see [`Cone`].
    Cone(Cone),
}

impl TankGeometry {
    /// Creates a tank with a fixed cross-sectional area.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `area` is not strictly positive and finite.
    pub fn constant(area: Area) -> Result<Self, ConstraintError> {
        Ok(Self::Constant {
            area: Constrained::new(area)?,
        })
    }

    /// Creates a conical tank.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `height` or `radius` is not strictly
    /// positive and finite.
    pub fn cone(
        height: Length,
        radius: Length,
        orientation: Orientation,
    ) -> Result<Self, ConstraintError> {
        Cone::new(height, radius, orientation).map(Self::Cone)
    }
}

impl CrossSection for TankGeometry {
    fn area(&self, height: Length) -> Area {
        match self {
            TankGeometry::Constant { area } => area.into_inner(),
            TankGeometry::Cone(cone) => cone.area(height),
        }
    }
}

/// Which way a conical tank points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Apex at the bottom, where the orifice is.
    ///
    /// The tank narrows as it empties.
    Upright,
    /// Wide base at the bottom, apex at the top.
    ///
    /// The tank widens as it empties.
    Inverted,
}

/// A right circular cone of total `height` and base `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    height: Constrained<Length, StrictlyPositive>,
    radius: Constrained<Length, StrictlyPositive>,
    orientation: Orientation,
}

impl Cone {
    /// Creates a cone from its total height, base radius, and orientation.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `height` or `radius` is not strictly
    /// positive and finite.
    pub fn new(
        height: Length,
        radius: Length,
        orientation: Orientation,
    ) -> Result<Self, ConstraintError> {
        Ok(Self {
            height: Constrained::new(height)?,
            radius: Constrained::new(radius)?,
            orientation,
        })
    }

    #[must_use]
    pub fn height(&self) -> Length {
        self.height.into_inner()
    }

    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius.into_inner()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the radius of the free surface when the liquid stands at `level`.
    ///
    /// The radius grows linearly with distance from the apex, at a rate of
    /// `radius / height`. It is zero at and beyond the apex.
    #[must_use]
    pub fn radius_at(&self, level: Length) -> Length {
        let from_apex = match self.orientation {
            Orientation::Upright => level,
            Orientation::Inverted => self.height() - level,
        };
        if from_apex <= Length::ZERO {
            return Length::ZERO;
        }
        self.radius() * (from_apex / self.height())
    }
}

impl CrossSection for Cone {
    fn area(&self, height: Length) -> Area {
        let radius = self.radius_at(height);
        PI * radius * radius
    }
}
