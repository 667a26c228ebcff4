use std::fmt::Debug;

use ndarray::{Array1, ArrayBase};

use crate::arithmetic::{float_power, Exponent};

/// The numeric payload of a quantity.
///
/// Implemented for `f64` (scalar quantities) and `Array1<f64>` (array
/// quantities). Array implementations work on whole arrays at once; callers
/// have to make sure both operands have the same [shape](Magnitude::shape)
/// before combining them.
pub trait Magnitude: Clone + Debug {
    fn shape(&self) -> &[usize];

    fn scaled(&self, factor: f64) -> Self;

    fn plus(&self, other: &Self) -> Self;

    fn times(&self, other: &Self) -> Self;

    fn divided_by(&self, other: &Self) -> Self;

    fn power(&self, e: &Exponent) -> Self;

    /// Element-wise equality reduced to a single boolean.
    fn all_equal(&self, other: &Self) -> bool;
}

impl Magnitude for f64 {
    fn shape(&self) -> &[usize] {
        &[]
    }

    fn scaled(&self, factor: f64) -> Self {
        factor * self
    }

    fn plus(&self, other: &Self) -> Self {
        self + other
    }

    fn times(&self, other: &Self) -> Self {
        self * other
    }

    fn divided_by(&self, other: &Self) -> Self {
        self / other
    }

    fn power(&self, e: &Exponent) -> Self {
        float_power(*self, e)
    }

    fn all_equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl Magnitude for Array1<f64> {
    fn shape(&self) -> &[usize] {
        ArrayBase::shape(self)
    }

    fn scaled(&self, factor: f64) -> Self {
        self * factor
    }

    fn plus(&self, other: &Self) -> Self {
        self + other
    }

    fn times(&self, other: &Self) -> Self {
        self * other
    }

    fn divided_by(&self, other: &Self) -> Self {
        self / other
    }

    fn power(&self, e: &Exponent) -> Self {
        self.mapv(|x| float_power(x, e))
    }

    fn all_equal(&self, other: &Self) -> bool {
        self == other
    }
}

/// Payloads that can be bound to a unit.
///
/// Numbers become scalar magnitudes, sequences become `Array1<f64>`. Owned
/// vectors are moved into the array without copying.
pub trait IntoMagnitude {
    type Magnitude: Magnitude;

    fn into_magnitude(self) -> Self::Magnitude;
}

impl IntoMagnitude for f64 {
    type Magnitude = f64;

    fn into_magnitude(self) -> f64 {
        self
    }
}

impl IntoMagnitude for i32 {
    type Magnitude = f64;

    fn into_magnitude(self) -> f64 {
        f64::from(self)
    }
}

impl IntoMagnitude for Array1<f64> {
    type Magnitude = Array1<f64>;

    fn into_magnitude(self) -> Array1<f64> {
        self
    }
}

impl IntoMagnitude for Vec<f64> {
    type Magnitude = Array1<f64>;

    fn into_magnitude(self) -> Array1<f64> {
        Array1::from_vec(self)
    }
}

impl IntoMagnitude for &[f64] {
    type Magnitude = Array1<f64>;

    fn into_magnitude(self) -> Array1<f64> {
        Array1::from_vec(self.to_vec())
    }
}

impl<const N: usize> IntoMagnitude for [f64; N] {
    type Magnitude = Array1<f64>;

    fn into_magnitude(self) -> Array1<f64> {
        Array1::from_vec(self.to_vec())
    }
}

impl IntoMagnitude for Vec<i32> {
    type Magnitude = Array1<f64>;

    fn into_magnitude(self) -> Array1<f64> {
        self.into_iter().map(f64::from).collect()
    }
}

impl IntoMagnitude for &[i32] {
    type Magnitude = Array1<f64>;

    fn into_magnitude(self) -> Array1<f64> {
        self.iter().copied().map(f64::from).collect()
    }
}

impl<const N: usize> IntoMagnitude for [i32; N] {
    type Magnitude = Array1<f64>;

    fn into_magnitude(self) -> Array1<f64> {
        self.into_iter().map(f64::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn scalar_operations() {
        assert_eq!(2.0_f64.scaled(3.0), 6.0);
        assert_eq!(2.0_f64.plus(&3.0), 5.0);
        assert_eq!(2.0_f64.times(&3.0), 6.0);
        assert_eq!(3.0_f64.divided_by(&2.0), 1.5);
        assert_eq!(9.0_f64.power(&Exponent::new(1, 2)), 3.0);
        assert!(2.0_f64.all_equal(&2.0));
        assert!(Magnitude::shape(&2.0_f64).is_empty());
    }

    #[test]
    fn array_operations() {
        let a: Array1<f64> = array![1.0, 2.0, 3.0];
        let b: Array1<f64> = array![2.0, 3.0, 4.0];

        assert_eq!(a.scaled(2.0), array![2.0, 4.0, 6.0]);
        assert_eq!(a.plus(&b), array![3.0, 5.0, 7.0]);
        assert_eq!(a.times(&b), array![2.0, 6.0, 12.0]);
        assert_eq!(b.divided_by(&array![2.0, 3.0, 8.0]), array![1.0, 1.0, 0.5]);
        assert_eq!(a.power(&Exponent::from_integer(2)), array![1.0, 4.0, 9.0]);
        assert_eq!(Magnitude::shape(&a), &[3]);
    }

    #[test]
    fn array_all_equal() {
        let a: Array1<f64> = array![1.0, 2.0, 3.0];
        assert!(a.all_equal(&array![1.0, 2.0, 3.0]));
        assert!(!a.all_equal(&array![1.0, 2.0, 4.0]));
        assert!(!a.all_equal(&array![1.0, 2.0]));
    }

    #[test]
    fn into_magnitude() {
        assert_eq!(2.5_f64.into_magnitude(), 2.5);
        assert_eq!(10_i32.into_magnitude(), 10.0);
        assert_eq!(vec![1.0_f64, 2.0].into_magnitude(), array![1.0, 2.0]);
        assert_eq!([1.0_f64, 2.0].into_magnitude(), array![1.0, 2.0]);
        assert_eq!([1.0_f64, 2.0][..].into_magnitude(), array![1.0, 2.0]);
        assert_eq!(array![1.0_f64, 2.0].into_magnitude(), array![1.0, 2.0]);
    }

    #[test]
    fn integer_sequences_become_float_arrays() {
        assert_eq!(vec![1, 0, 0].into_magnitude(), array![1.0, 0.0, 0.0]);
        assert_eq!([1, 2, 3].into_magnitude(), array![1.0, 2.0, 3.0]);
        assert_eq!([-4, 5][..].into_magnitude(), array![-4.0, 5.0]);
    }

    #[test]
    fn vectors_are_moved_into_arrays() {
        let values = vec![1.0_f64, 2.0, 3.0];
        let pointer = values.as_ptr();
        let array = values.into_magnitude();
        assert_eq!(array.as_ptr(), pointer);
    }
}
