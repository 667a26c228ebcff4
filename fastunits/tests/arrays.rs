mod common;

use common::{expect_failure, get_abc_units};

use fastunits::{si::SiUnits, Array1, ArrayQuantity, Exponent, QuantityError};

const SIZE: usize = 10_000;

fn samples(offset: f64) -> Array1<f64> {
    Array1::linspace(offset, offset + 1.0, SIZE)
}

#[test]
fn test_bind_sequences() {
    let units = get_abc_units();
    let a = &units.a;

    let from_vec = vec![1.0_f64, 2.0, 3.0] << a;
    let from_array = Array1::from_vec(vec![1.0_f64, 2.0, 3.0]) << a;

    assert!(from_vec.equals_exact(&from_array));
    assert!(from_vec.equals_exact(&a.bind([1.0_f64, 2.0, 3.0])));
    assert_eq!(from_vec.value().len(), 3);
}

#[test]
fn test_elementwise_addition() {
    let units = get_abc_units();
    let a = &units.a;

    let sum = (&(vec![1.0_f64, 2.0, 3.0] << a) + &(vec![2.0_f64, 3.0, 4.0] << a)).unwrap();
    assert!(sum.equals_exact(&ArrayQuantity::new(
        Array1::from_vec(vec![3.0, 5.0, 7.0]),
        a.clone()
    )));
}

#[test]
fn test_scalar_broadcast() {
    let si = SiUnits::new();
    let q = vec![1.0_f64, 2.0, 3.0] << &si.meter;

    assert_eq!(2.0_f64 * &q, vec![2.0_f64, 4.0, 6.0] << &si.meter);
    assert_eq!(&q * 0.5, vec![0.5_f64, 1.0, 1.5] << &si.meter);
}

#[test]
fn test_large_mixed_unit_addition() {
    let si = SiUnits::new();

    let in_meters = samples(0.0) << &si.meter;
    let in_centimeters = samples(5.0) << &si.centimeter;

    let sum = (&in_meters + &in_centimeters).unwrap();
    assert_eq!(sum.unit(), &si.meter);
    assert_eq!(sum.value().len(), SIZE);
    assert_eq!(sum.value(), &(&samples(0.0) + &(&samples(5.0) * 0.01)));

    let in_seconds = samples(0.0) << &si.second;
    expect_failure(&in_meters + &in_seconds, "Incommensurable units");
}

#[test]
fn test_large_products() {
    let si = SiUnits::new();

    let lengths = samples(1.0) << &si.meter;
    let areas = &lengths * &lengths;

    assert_eq!(areas.unit().to_string(), "m·m");
    assert!(areas.equals_exact(&ArrayQuantity::new(
        samples(1.0).mapv(|x| x * x),
        &si.meter * &si.meter
    )));
    assert_eq!(
        lengths.power(Exponent::from_integer(2)).value(),
        areas.value()
    );
}

#[test]
fn test_equivalence_across_units() {
    let si = SiUnits::new();

    let meters = vec![1.0_f64, 2.5, 4.0] << &si.meter;
    let centimeters = vec![100.0_f64, 250.0, 400.0] << &si.centimeter;

    assert!(!meters.equals_exact(&centimeters));
    assert!(centimeters.is_equivalent_exact(&meters));
    assert!(!meters.is_equivalent_exact(&(vec![1.0_f64, 2.5, 4.0] << &si.second)));
}

#[test]
fn test_shape_mismatch() {
    let units = get_abc_units();
    let a = &units.a;

    let short = vec![1.0_f64, 2.0] << a;
    let long = vec![1.0_f64, 2.0, 3.0] << a;

    assert_eq!(
        &short + &long,
        Err(QuantityError::ShapeMismatch(vec![2], vec![3]))
    );
    assert!(short.checked_mul(&long).is_err());
    assert!(!short.is_equivalent_exact(&long));
}

#[test]
fn test_integer_payloads() {
    let si = SiUnits::new();
    let m = &si.meter;

    assert_eq!(vec![1, 2, 3] << m, Array1::from_vec(vec![1.0_f64, 2.0, 3.0]) << m);
    assert_eq!([1, 0, 0] << m, vec![1.0_f64, 0.0, 0.0] << m);
    assert_eq!(2 * ([1, 2, 3] << m), [2, 4, 6] << m);
}

#[test]
fn test_scalar_times_array() {
    let si = SiUnits::new();

    let velocities = [1, 2, 3] << &(&si.meter / &si.second);
    let duration = 2 << &si.second;

    let distances = &duration * &velocities;
    assert_eq!(distances.unit().to_string(), "s·m·s⁻¹");
    assert_eq!(distances, [2, 4, 6] << &si.meter);
    assert_eq!(velocities * duration, [2, 4, 6] << &si.meter);
}
