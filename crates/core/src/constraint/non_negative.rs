use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError, Finite, sign_of};

/// Marker type enforcing that a value is zero or greater and finite.
///
/// Used for quantities where zero is a meaningful state, like the initial
/// liquid height of an already empty tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonNegative;

impl<T: PartialOrd + Zero + Finite> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign_of(value)? {
            Ordering::Greater | Ordering::Equal => Ok(()),
            Ordering::Less => Err(ConstraintError::Negative),
        }
    }
}
