use std::{
    cmp::Ordering,
    fmt::Display,
    ops::{Add, Div, Mul, Neg, Shl, Sub},
};

use log::trace;
use ndarray::Array1;
use thiserror::Error;

use crate::{
    arithmetic::{Exponent, Power},
    dimension::DimensionError,
    magnitude::{IntoMagnitude, Magnitude},
    unit::Unit,
};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum QuantityError {
    #[error("Incommensurable units: '{0}' can not be converted to '{1}'.")]
    IncommensurableUnits(Unit, Unit),

    #[error("Array shapes {0:?} and {1:?} do not match.")]
    ShapeMismatch(Vec<usize>, Vec<usize>),

    #[error(transparent)]
    Dimension(#[from] DimensionError),
}

pub type Result<T> = std::result::Result<T, QuantityError>;

/// A numeric payload bound to a [`Unit`].
///
/// Every operation returns a new quantity, operands are never modified.
#[derive(Debug, Clone)]
pub struct Quantity<V = f64> {
    value: V,
    unit: Unit,
}

pub type ScalarQuantity = Quantity<f64>;
pub type ArrayQuantity = Quantity<Array1<f64>>;

impl<V: Magnitude> Quantity<V> {
    pub fn new(value: V, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn from_unit(value: impl IntoMagnitude<Magnitude = V>, unit: &Unit) -> Self {
        unit.bind(value)
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn into_parts(self) -> (V, Unit) {
        (self.value, self.unit)
    }

    /// The value of this quantity expressed in `unit`. This is the only place
    /// where values move between units.
    pub fn to_value(&self, unit: &Unit) -> Result<V> {
        if !self.unit.is_commensurable_with(unit) {
            return Err(QuantityError::IncommensurableUnits(
                self.unit.clone(),
                unit.clone(),
            ));
        }

        trace!("Converting from '{}' to '{}'", self.unit, unit);
        Ok(self
            .value
            .scaled(self.unit.multiplier() / unit.multiplier()))
    }

    pub fn to(&self, unit: &Unit) -> Result<Self> {
        Ok(Quantity::new(self.to_value(unit)?, unit.clone()))
    }

    fn ensure_same_shape(&self, other: &Self) -> Result<()> {
        if self.value.shape() == other.value.shape() {
            Ok(())
        } else {
            Err(QuantityError::ShapeMismatch(
                self.value.shape().to_vec(),
                other.value.shape().to_vec(),
            ))
        }
    }

    /// Adds `other` after converting it to the unit of `self`. The result is
    /// expressed in the unit of `self`.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other)?;
        let converted = other.to_value(&self.unit)?;
        Ok(Quantity::new(self.value.plus(&converted), self.unit.clone()))
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other)?;
        let converted = other.to_value(&self.unit)?.scaled(-1.0);
        Ok(Quantity::new(self.value.plus(&converted), self.unit.clone()))
    }

    /// Multiplies values and composes units. Unlike addition, no conversion
    /// takes place: `cm * m` stays `cm·m`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        let unit = self.unit.checked_mul(&other.unit)?;
        self.ensure_same_shape(other)?;
        Ok(Quantity::new(self.value.times(&other.value), unit))
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        let unit = self.unit.checked_div(&other.unit)?;
        self.ensure_same_shape(other)?;
        Ok(Quantity::new(self.value.divided_by(&other.value), unit))
    }

    /// Multiplies the value by a plain number, keeping the unit.
    pub fn scale(&self, factor: f64) -> Self {
        Quantity::new(self.value.scaled(factor), self.unit.clone())
    }

    pub fn power(&self, e: Exponent) -> Self {
        Quantity::new(self.value.power(&e), self.unit.clone().power(e))
    }

    /// Same unit and same value(s), without any conversion.
    pub fn equals_exact(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value.all_equal(&other.value)
    }

    /// Equal as given, or equal once `other` is converted to the unit of
    /// `self`. Incommensurable quantities are never equivalent.
    pub fn is_equivalent_exact(&self, other: &Self) -> bool {
        self.equals_exact(other)
            || other
                .to(&self.unit)
                .is_ok_and(|converted| self.equals_exact(&converted))
    }
}

impl ScalarQuantity {
    /// Broadcasts this scalar quantity over every element of `other`. The
    /// units compose like in [`Quantity::checked_mul`].
    pub fn checked_mul_array(&self, other: &ArrayQuantity) -> Result<ArrayQuantity> {
        let unit = self.unit.checked_mul(&other.unit)?;
        Ok(Quantity::new(other.value.scaled(self.value), unit))
    }
}

impl ArrayQuantity {
    pub fn checked_mul_scalar(&self, other: &ScalarQuantity) -> Result<ArrayQuantity> {
        let unit = self.unit.checked_mul(&other.unit)?;
        Ok(Quantity::new(self.value.scaled(other.value), unit))
    }
}

impl<V: Magnitude> Add for &Quantity<V> {
    type Output = Result<Quantity<V>>;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<V: Magnitude> Sub for &Quantity<V> {
    type Output = Result<Quantity<V>>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

/// # Panics
///
/// Panics if the units were built against bases that do not match, or if the
/// array shapes differ. Use [`Quantity::checked_mul`] to handle those cases.
impl<V: Magnitude> Mul for &Quantity<V> {
    type Output = Quantity<V>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<V: Magnitude> Mul for Quantity<V> {
    type Output = Quantity<V>;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

/// # Panics
///
/// Same as for multiplication, see [`Quantity::checked_div`].
impl<V: Magnitude> Div for &Quantity<V> {
    type Output = Quantity<V>;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<V: Magnitude> Div for Quantity<V> {
    type Output = Quantity<V>;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl<V: Magnitude> Mul<f64> for &Quantity<V> {
    type Output = Quantity<V>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl<V: Magnitude> Mul<f64> for Quantity<V> {
    type Output = Quantity<V>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl<V: Magnitude> Mul<&Quantity<V>> for f64 {
    type Output = Quantity<V>;

    fn mul(self, rhs: &Quantity<V>) -> Self::Output {
        rhs.scale(self)
    }
}

impl<V: Magnitude> Mul<Quantity<V>> for f64 {
    type Output = Quantity<V>;

    fn mul(self, rhs: Quantity<V>) -> Self::Output {
        rhs.scale(self)
    }
}

impl<V: Magnitude> Mul<i32> for &Quantity<V> {
    type Output = Quantity<V>;

    fn mul(self, rhs: i32) -> Self::Output {
        self.scale(f64::from(rhs))
    }
}

impl<V: Magnitude> Mul<i32> for Quantity<V> {
    type Output = Quantity<V>;

    fn mul(self, rhs: i32) -> Self::Output {
        self.scale(f64::from(rhs))
    }
}

impl<V: Magnitude> Mul<&Quantity<V>> for i32 {
    type Output = Quantity<V>;

    fn mul(self, rhs: &Quantity<V>) -> Self::Output {
        rhs.scale(f64::from(self))
    }
}

impl<V: Magnitude> Mul<Quantity<V>> for i32 {
    type Output = Quantity<V>;

    fn mul(self, rhs: Quantity<V>) -> Self::Output {
        rhs.scale(f64::from(self))
    }
}

/// # Panics
///
/// Panics if the units were built against bases that do not match, see
/// [`ScalarQuantity::checked_mul_array`].
impl Mul<&ArrayQuantity> for &ScalarQuantity {
    type Output = ArrayQuantity;

    fn mul(self, rhs: &ArrayQuantity) -> Self::Output {
        self.checked_mul_array(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul<ArrayQuantity> for ScalarQuantity {
    type Output = ArrayQuantity;

    fn mul(self, rhs: ArrayQuantity) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&ScalarQuantity> for &ArrayQuantity {
    type Output = ArrayQuantity;

    fn mul(self, rhs: &ScalarQuantity) -> Self::Output {
        self.checked_mul_scalar(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul<ScalarQuantity> for ArrayQuantity {
    type Output = ArrayQuantity;

    fn mul(self, rhs: ScalarQuantity) -> Self::Output {
        &self * &rhs
    }
}

impl<V: Magnitude> Neg for Quantity<V> {
    type Output = Quantity<V>;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl<V: Magnitude> PartialEq for Quantity<V> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equivalent_exact(other)
    }
}

impl PartialOrd for ScalarQuantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let other_value = other.to_value(&self.unit).ok()?;
        self.value.partial_cmp(&other_value)
    }
}

impl<V: Magnitude + Display> Display for Quantity<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = self.unit.to_string();
        if unit.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, unit)
        }
    }
}

macro_rules! bind_operator {
    ($($payload:ty => $magnitude:ty),*) => {
        $(
            impl Shl<&Unit> for $payload {
                type Output = Quantity<$magnitude>;

                fn shl(self, unit: &Unit) -> Self::Output {
                    unit.bind(self)
                }
            }
        )*
    };
}

bind_operator!(
    f64 => f64,
    i32 => f64,
    Vec<f64> => Array1<f64>,
    &[f64] => Array1<f64>,
    Vec<i32> => Array1<f64>,
    &[i32] => Array1<f64>,
    Array1<f64> => Array1<f64>
);

impl<const N: usize> Shl<&Unit> for [f64; N] {
    type Output = ArrayQuantity;

    fn shl(self, unit: &Unit) -> Self::Output {
        unit.bind(self)
    }
}

impl<const N: usize> Shl<&Unit> for [i32; N] {
    type Output = ArrayQuantity;

    fn shl(self, unit: &Unit) -> Self::Output {
        unit.bind(self)
    }
}
