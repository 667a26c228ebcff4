use std::{
    fmt::Display,
    ops::{Div, Mul},
    sync::Arc,
};

use compact_str::{CompactString, ToCompactString};
use itertools::Itertools;
use log::debug;
use num_traits::Zero;
use thiserror::Error;

use crate::arithmetic::{pretty_exponent, Exponent, Power};

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum DimensionError {
    #[error("Unknown base dimension '{symbol}' (base is '{base}').")]
    UnknownSymbol { symbol: String, base: String },

    #[error("Base dimension '{0}' appears more than once.")]
    DuplicateSymbol(String),

    #[error("Base dimension symbols must not be empty.")]
    EmptySymbol,

    #[error("Expected {expected} exponents for base '{base}', got {actual}.")]
    ExponentCount {
        base: String,
        expected: usize,
        actual: usize,
    },

    #[error("Dimensions built against different bases ('{0}' and '{1}') can not be combined.")]
    BaseMismatch(String, String),
}

pub type Result<T> = std::result::Result<T, DimensionError>;

/// How two base descriptors are compared when dimensions built against them
/// meet in an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseMatching {
    /// Bases match if they list the same symbols in the same order.
    #[default]
    Value,

    /// Bases match only if they are the very same shared descriptor.
    Identity,
}

/// The ordered list of fundamental dimension symbols (e.g. `T`, `L`, `M`)
/// that gives the components of a [`Dimension`] their meaning.
///
/// A base is built once and shared by every dimension derived from it.
#[derive(Debug, PartialEq, Eq)]
pub struct Base {
    symbols: Vec<CompactString>,
    matching: BaseMatching,
}

impl Base {
    pub fn new<S: AsRef<str>>(symbols: impl IntoIterator<Item = S>) -> Result<Arc<Self>> {
        Self::with_matching(symbols, BaseMatching::default())
    }

    pub fn with_matching<S: AsRef<str>>(
        symbols: impl IntoIterator<Item = S>,
        matching: BaseMatching,
    ) -> Result<Arc<Self>> {
        let symbols: Vec<CompactString> = symbols
            .into_iter()
            .map(|s| s.as_ref().to_compact_string())
            .collect();

        if symbols.iter().any(|s| s.is_empty()) {
            return Err(DimensionError::EmptySymbol);
        }
        if let Some(duplicate) = symbols.iter().duplicates().next() {
            return Err(DimensionError::DuplicateSymbol(duplicate.to_string()));
        }

        Ok(Self::new_unchecked(symbols, matching))
    }

    /// Builds a base where every character is one symbol, e.g. `"TLM"`.
    pub fn from_symbols(symbols: &str) -> Result<Arc<Self>> {
        Self::new(symbols.chars().map(|c| c.to_compact_string()))
    }

    pub(crate) fn new_unchecked(symbols: Vec<CompactString>, matching: BaseMatching) -> Arc<Self> {
        debug_assert!(symbols.iter().all_unique());
        debug!(
            "Creating base '{}' ({matching:?} matching)",
            symbols.iter().join("")
        );
        Arc::new(Base { symbols, matching })
    }

    pub fn symbols(&self) -> &[CompactString] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn matching(&self) -> BaseMatching {
        self.matching
    }

    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s.as_str() == symbol)
    }

    /// Two descriptors match if they are the same allocation, or if both
    /// compare by value and hold the same symbols.
    pub fn matches(self: &Arc<Self>, other: &Arc<Self>) -> bool {
        Arc::ptr_eq(self, other)
            || (self.matching == BaseMatching::Value
                && other.matching == BaseMatching::Value
                && self.symbols == other.symbols)
    }

    /// One-hot dimensions for every symbol, in base order.
    pub fn dimensions(self: &Arc<Self>) -> Vec<Dimension> {
        (0..self.len())
            .map(|position| Dimension::one_hot(position, self))
            .collect()
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbols.iter().join(""))
    }
}

/// One-hot dimensions for every symbol of `base`, optionally followed by the
/// dimensionless dimension.
pub fn dimensions_from_base(base: &Arc<Base>, with_dimensionless: bool) -> Vec<Dimension> {
    let mut dimensions = base.dimensions();
    if with_dimensionless {
        dimensions.push(Dimension::dimensionless(base));
    }
    dimensions
}

/// A vector of rational exponents, one per base symbol.
#[derive(Debug, Clone)]
pub struct Dimension {
    exponents: Vec<Exponent>,
    base: Arc<Base>,
}

impl Dimension {
    /// The one-hot dimension for `symbol`. An empty symbol stands for the
    /// dimensionless marker and yields the all-zero vector.
    pub fn create(symbol: &str, base: &Arc<Base>) -> Result<Self> {
        if symbol.is_empty() {
            return Ok(Self::dimensionless(base));
        }

        base.position(symbol)
            .map(|position| Self::one_hot(position, base))
            .ok_or_else(|| DimensionError::UnknownSymbol {
                symbol: symbol.to_owned(),
                base: base.to_string(),
            })
    }

    pub fn dimensionless(base: &Arc<Base>) -> Self {
        Dimension {
            exponents: vec![Exponent::zero(); base.len()],
            base: Arc::clone(base),
        }
    }

    pub fn from_exponents(
        exponents: impl IntoIterator<Item = Exponent>,
        base: &Arc<Base>,
    ) -> Result<Self> {
        let exponents: Vec<Exponent> = exponents.into_iter().collect();
        if exponents.len() != base.len() {
            return Err(DimensionError::ExponentCount {
                base: base.to_string(),
                expected: base.len(),
                actual: exponents.len(),
            });
        }

        Ok(Dimension {
            exponents,
            base: Arc::clone(base),
        })
    }

    pub(crate) fn one_hot(position: usize, base: &Arc<Base>) -> Self {
        let mut dimension = Self::dimensionless(base);
        dimension.exponents[position] = Exponent::from_integer(1);
        dimension
    }

    pub fn exponents(&self) -> &[Exponent] {
        &self.exponents
    }

    pub fn exponent_of(&self, symbol: &str) -> Option<Exponent> {
        self.base.position(symbol).map(|p| self.exponents[p])
    }

    pub fn base(&self) -> &Arc<Base> {
        &self.base
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(Zero::is_zero)
    }

    fn ensure_same_base(&self, other: &Self) -> Result<()> {
        if self.base.matches(&other.base) {
            Ok(())
        } else {
            Err(DimensionError::BaseMismatch(
                self.base.to_string(),
                other.base.to_string(),
            ))
        }
    }

    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        self.ensure_same_base(other)?;

        Ok(Dimension {
            exponents: self
                .exponents
                .iter()
                .zip(&other.exponents)
                .map(|(a, b)| a + b)
                .collect(),
            base: Arc::clone(&self.base),
        })
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        self.checked_mul(&other.clone().invert())
    }
}

impl Power for Dimension {
    fn power(mut self, e: Exponent) -> Self {
        self.exponents.iter_mut().for_each(|exponent| *exponent *= e);
        self
    }
}

/// # Panics
///
/// Panics if the two dimensions were built against bases that do not match.
/// Use [`Dimension::checked_mul`] to handle that case.
impl Mul for &Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Div for &Dimension {
    type Output = Dimension;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.base.matches(&other.base) && self.exponents == other.exponents
    }
}

impl Eq for Dimension {}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.base.is_empty() {
            return f.write_str("(0)");
        }

        for (symbol, exponent) in self.base.symbols.iter().zip(&self.exponents) {
            write!(f, "{}{}", symbol, pretty_exponent(exponent))?;
        }
        Ok(())
    }
}
