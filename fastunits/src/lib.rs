//! Physical quantities with units and dimensions.
//!
//! A [`Base`] lists the symbols of the base dimensions (e.g. `T`, `L`, `M`).
//! A [`Dimension`] is a vector of rational exponents over such a base, a
//! [`Unit`] scales a dimension by a multiplier and carries a printable name,
//! and a [`Quantity`] binds a scalar or an array of values to a unit.
//!
//! ```
//! use fastunits::{si::SiUnits, Quantity};
//!
//! let si = SiUnits::new();
//! let length = 12.5 << &si.centimeter;
//! let total = (&length + &(1.0 << &si.meter)).unwrap();
//!
//! assert_eq!(total.to_value(&si.centimeter), Ok(112.5));
//! assert_eq!(total, Quantity::new(1.125, si.meter.clone()));
//! ```

mod arithmetic;
mod dimension;
mod magnitude;
mod quantity;
pub mod si;
mod unit;

use thiserror::Error;

pub use arithmetic::{pretty_exponent, Exponent, Power, Rational};
pub use dimension::{dimensions_from_base, Base, BaseMatching, Dimension, DimensionError};
pub use magnitude::{IntoMagnitude, Magnitude};
pub use ndarray::Array1;
pub use quantity::{ArrayQuantity, Quantity, QuantityError, ScalarQuantity};
pub use unit::{Multiplier, Unit, UnitError};

#[derive(Debug, Error, PartialEq)]
pub enum FastunitsError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    #[error(transparent)]
    Unit(#[from] UnitError),
    #[error(transparent)]
    Quantity(#[from] QuantityError),
}

pub type Result<T> = std::result::Result<T, FastunitsError>;
