use std::{
    fmt::Display,
    ops::{Div, Mul},
};

use compact_str::{format_compact, CompactString, ToCompactString};
use itertools::Itertools;
use thiserror::Error;

use crate::{
    arithmetic::{float_power, pretty_exponent, Exponent, Power},
    dimension::{Dimension, Result},
    magnitude::IntoMagnitude,
    quantity::Quantity,
};

/// Scale of a unit relative to the reference (multiplier 1) unit of its
/// dimension.
pub type Multiplier = f64;

/// Name fragment carried by dimensionless units. It is skipped when names are
/// joined and stays empty under exponentiation.
const DIMENSIONLESS_NAME: &str = "";

#[derive(Clone, Debug, Error, PartialEq)]
pub enum UnitError {
    #[error("Unit multipliers must be positive and finite, got {0}.")]
    InvalidMultiplier(Multiplier),
}

fn ensure_valid_multiplier(multiplier: Multiplier) -> std::result::Result<Multiplier, UnitError> {
    if multiplier.is_finite() && multiplier > 0.0 {
        Ok(multiplier)
    } else {
        Err(UnitError::InvalidMultiplier(multiplier))
    }
}

/// A named, scaled instance of a [`Dimension`].
///
/// Simple and composite units share this type: composing two units multiplies
/// their multipliers and concatenates their name fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    multiplier: Multiplier,
    dimension: Dimension,
    names: Vec<CompactString>,
}

impl Unit {
    /// # Panics
    ///
    /// Panics if `multiplier` is not a positive, finite number. Use
    /// [`Unit::try_new`] to handle that case.
    pub fn new<S: AsRef<str>>(
        multiplier: Multiplier,
        dimension: Dimension,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::try_new(multiplier, dimension, names).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new<S: AsRef<str>>(
        multiplier: Multiplier,
        dimension: Dimension,
        names: impl IntoIterator<Item = S>,
    ) -> std::result::Result<Self, UnitError> {
        Ok(Unit {
            multiplier: ensure_valid_multiplier(multiplier)?,
            dimension,
            names: names
                .into_iter()
                .map(|n| n.as_ref().to_compact_string())
                .collect(),
        })
    }

    /// The anchor unit of `dimension`: every other unit of that dimension is
    /// defined relative to it.
    pub fn base(dimension: Dimension, name: &str) -> Self {
        Unit::new(1.0, dimension, [name])
    }

    /// A new unit that is `relative_multiplier` times this one.
    ///
    /// # Panics
    ///
    /// Panics if the resulting multiplier is not positive and finite, see
    /// [`Unit::checked_derived`].
    pub fn derived(&self, relative_multiplier: Multiplier, name: &str) -> Self {
        self.checked_derived(relative_multiplier, name)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn checked_derived(
        &self,
        relative_multiplier: Multiplier,
        name: &str,
    ) -> std::result::Result<Self, UnitError> {
        Unit::try_new(
            relative_multiplier * self.multiplier,
            self.dimension.clone(),
            [name],
        )
    }

    /// Gives a composite unit its own name, e.g. `rad` for `m/m`.
    pub fn from_unit(unit: &Unit, name: &str) -> Self {
        Unit::new(unit.multiplier, unit.dimension.clone(), [name])
    }

    pub fn dimensionless(dimension: &Dimension) -> Self {
        Unit::new(
            1.0,
            dimension.clone().power(Exponent::from_integer(0)),
            [DIMENSIONLESS_NAME],
        )
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    pub fn names(&self) -> &[CompactString] {
        &self.names
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    pub fn is_commensurable_with(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    pub fn checked_mul(&self, other: &Unit) -> Result<Unit> {
        Ok(Unit {
            multiplier: self.multiplier * other.multiplier,
            dimension: self.dimension.checked_mul(&other.dimension)?,
            names: self.names.iter().chain(&other.names).cloned().collect(),
        })
    }

    pub fn checked_div(&self, other: &Unit) -> Result<Unit> {
        let minus_one = Exponent::from_integer(-1);

        Ok(Unit {
            multiplier: self.multiplier / other.multiplier,
            dimension: self.dimension.checked_div(&other.dimension)?,
            names: self
                .names
                .iter()
                .cloned()
                .chain(other.names.iter().map(|n| name_power(n, &minus_one)))
                .collect(),
        })
    }

    /// Binds a numeric payload to this unit. Plain numbers give a scalar
    /// quantity, sequences and arrays give an array quantity.
    pub fn bind<V: IntoMagnitude>(&self, value: V) -> Quantity<V::Magnitude> {
        Quantity::new(value.into_magnitude(), self.clone())
    }
}

fn name_power(name: &str, e: &Exponent) -> CompactString {
    if name == DIMENSIONLESS_NAME {
        CompactString::new(DIMENSIONLESS_NAME)
    } else {
        format_compact!("{name}{}", pretty_exponent(e))
    }
}

impl Power for Unit {
    fn power(self, e: Exponent) -> Self {
        Unit {
            multiplier: float_power(self.multiplier, &e),
            names: self.names.iter().map(|n| name_power(n, &e)).collect(),
            dimension: self.dimension.power(e),
        }
    }
}

/// # Panics
///
/// Panics if the dimensions of both units were built against bases that do
/// not match. Use [`Unit::checked_mul`] to handle that case.
impl Mul for &Unit {
    type Output = Unit;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

/// # Panics
///
/// Same as for multiplication, see [`Unit::checked_div`].
impl Div for &Unit {
    type Output = Unit;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .names
            .iter()
            .filter(|n| n.as_str() != DIMENSIONLESS_NAME)
            .join("·");

        if joined.is_empty() && !self.names.is_empty() {
            f.write_str("(dimensionless)")
        } else {
            f.write_str(&joined)
        }
    }
}
