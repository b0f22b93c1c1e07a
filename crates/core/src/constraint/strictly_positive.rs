use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError, Finite, sign_of};

/// Marker type enforcing that a value is strictly positive (greater than zero)
/// and finite.
///
/// # Example
///
/// ```
/// use torricelli_core::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{area::square_meter, f64::Area};
///
/// let hole = Constrained::<Area, StrictlyPositive>::new(Area::new::<square_meter>(3e-4));
/// assert!(hole.is_ok());
///
/// let closed = Constrained::<Area, StrictlyPositive>::new(Area::new::<square_meter>(0.0));
/// assert!(closed.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrictlyPositive;

impl<T: PartialOrd + Zero + Finite> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign_of(value)? {
            Ordering::Greater => Ok(()),
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Less => Err(ConstraintError::Negative),
        }
    }
}
