//! Numeric constraints checked once at construction time.
//!
//! Parameters such as gravity, orifice area, or time step are only meaningful
//! when strictly positive and finite. Wrapping them in [`Constrained<T, C>`]
//! lets the integrator trust those invariants without rechecking them on every
//! step.
//!
//! # Provided Constraints
//!
//! - [`NonNegative`]: zero or greater, finite
//! - [`StrictlyPositive`]: greater than zero, finite
//!
//! Both work with plain `f64` and with any `f64`-backed [`uom`] quantity.

mod non_negative;
mod strictly_positive;

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
}

/// Numeric values whose finiteness can be queried.
pub trait Finite {
    /// Returns `true` if the value is neither infinite nor NaN.
    fn is_finite(&self) -> bool;
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl<D, U> Finite for uom::si::Quantity<D, U, f64>
where
    D: uom::si::Dimension + ?Sized,
    U: uom::si::Units<f64> + ?Sized,
{
    fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// Compares a value against zero, rejecting NaN and infinities.
fn sign_of<T>(value: &T) -> Result<Ordering, ConstraintError>
where
    T: PartialOrd + Zero + Finite,
{
    let ordering = value
        .partial_cmp(&T::zero())
        .ok_or(ConstraintError::NotANumber)?;
    if !value.is_finite() {
        return Err(ConstraintError::Infinite);
    }
    Ok(ordering)
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use torricelli_core::constraint::{Constrained, StrictlyPositive};
///
/// let dt = Constrained::<f64, StrictlyPositive>::new(0.1).unwrap();
/// assert_eq!(dt.into_inner(), 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
