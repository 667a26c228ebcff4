#![allow(dead_code)]

use std::sync::Arc;

use fastunits::{dimensions_from_base, Base, Dimension, Unit};

/// Units over the toy base `ABC`: `a` and `b` are base units, `da` is ten `a`.
pub struct AbcUnits {
    pub base: Arc<Base>,
    pub a: Unit,
    pub da: Unit,
    pub b: Unit,
    pub c: Unit,
}

pub fn abc_base() -> Arc<Base> {
    Base::from_symbols("ABC").expect("ABC is a valid base")
}

pub fn abc_dimensions() -> (Dimension, Dimension, Dimension, Dimension) {
    let base = abc_base();
    match dimensions_from_base(&base, true).as_slice() {
        [a, b, c, none] => (a.clone(), b.clone(), c.clone(), none.clone()),
        other => panic!("expected four dimensions, got {}", other.len()),
    }
}

pub fn get_abc_units() -> AbcUnits {
    let (dim_a, dim_b, dim_c, _) = abc_dimensions();
    let a = Unit::base(dim_a, "a");

    AbcUnits {
        base: dim_b.base().clone(),
        da: a.derived(10.0, "da"),
        a,
        b: Unit::base(dim_b, "b"),
        c: Unit::base(dim_c, "c"),
    }
}

pub fn expect_failure<T: std::fmt::Debug, E: std::fmt::Display>(
    result: Result<T, E>,
    msg_part: &str,
) {
    match result {
        Err(e) => {
            let error_message = e.to_string();
            println!("{}", error_message);
            assert!(error_message.contains(msg_part));
        }
        Ok(value) => panic!("expected an error, got {value:?}"),
    }
}
