//! The International System of Units.
//!
//! [`si_base`] holds the seven SI base dimensions, [`SiUnits`] bundles the
//! corresponding base units and a few common derived ones.

use std::sync::Arc;

use compact_str::CompactString;
use log::debug;

use crate::{
    arithmetic::Power,
    dimension::{Base, BaseMatching, Dimension},
    unit::Unit,
};

/// Time, length, mass, electric current, thermodynamic temperature, amount of
/// substance and luminous intensity.
pub const SI_SYMBOLS: [&str; 7] = ["T", "L", "M", "I", "ϴ", "N", "J"];

/// The mechanical subset of the SI base: time, length and mass.
pub const TLM_SYMBOLS: [&str; 3] = ["T", "L", "M"];

fn base_from_constants(symbols: &[&str]) -> Arc<Base> {
    Base::new_unchecked(
        symbols.iter().map(|&s| CompactString::from(s)).collect(),
        BaseMatching::Value,
    )
}

pub fn si_base() -> Arc<Base> {
    base_from_constants(&SI_SYMBOLS)
}

pub fn tlm_base() -> Arc<Base> {
    base_from_constants(&TLM_SYMBOLS)
}

#[derive(Debug, Clone)]
pub struct SiUnits {
    pub base: Arc<Base>,

    pub second: Unit,
    pub meter: Unit,
    pub kilogram: Unit,
    pub ampere: Unit,
    pub kelvin: Unit,
    pub mole: Unit,
    pub candela: Unit,

    pub centimeter: Unit,
    pub kilometer: Unit,
    pub gram: Unit,
    pub minute: Unit,
    pub hour: Unit,
    pub hertz: Unit,
    pub newton: Unit,
    pub joule: Unit,
    pub watt: Unit,
    pub radian: Unit,
}

impl SiUnits {
    pub fn new() -> Self {
        debug!("Creating SI unit system");

        let base = si_base();
        let dimension = |position| Dimension::one_hot(position, &base);

        let second = Unit::base(dimension(0), "s");
        let meter = Unit::base(dimension(1), "m");
        let kilogram = Unit::base(dimension(2), "kg");
        let ampere = Unit::base(dimension(3), "A");
        let kelvin = Unit::base(dimension(4), "K");
        let mole = Unit::base(dimension(5), "mol");
        let candela = Unit::base(dimension(6), "cd");

        let minute = second.derived(60.0, "min");
        let hour = minute.derived(60.0, "h");
        let newton = Unit::from_unit(&(&(&kilogram * &meter) / &second.clone().powi(2)), "N");
        let joule = Unit::from_unit(&(&newton * &meter), "J");
        let watt = Unit::from_unit(&(&joule / &second), "W");

        SiUnits {
            centimeter: meter.derived(1e-2, "cm"),
            kilometer: meter.derived(1e3, "km"),
            gram: kilogram.derived(1e-3, "g"),
            hertz: Unit::from_unit(&second.clone().invert(), "Hz"),
            radian: Unit::from_unit(&(&meter / &meter), "rad"),
            base,
            second,
            meter,
            kilogram,
            ampere,
            kelvin,
            mole,
            candela,
            minute,
            hour,
            newton,
            joule,
            watt,
        }
    }
}

impl Default for SiUnits {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::quantity::Quantity;

    #[test]
    fn bases() {
        assert_eq!(si_base().to_string(), "TLMIϴNJ");
        assert_eq!(tlm_base().len(), 3);
        assert!(si_base().matches(&si_base()));
        assert!(!si_base().matches(&tlm_base()));
    }

    #[test]
    fn base_units() {
        let si = SiUnits::new();
        assert_eq!(si.second.dimension().to_string(), "T¹L⁰M⁰I⁰ϴ⁰N⁰J⁰");
        assert_eq!(si.kelvin.dimension().to_string(), "T⁰L⁰M⁰I⁰ϴ¹N⁰J⁰");
        for unit in [&si.second, &si.meter, &si.kilogram, &si.candela] {
            assert_eq!(unit.multiplier(), 1.0);
        }
    }

    #[test]
    fn derived_units() {
        let si = SiUnits::default();

        assert_eq!(si.hour.multiplier(), 3600.0);
        assert_eq!(si.newton.to_string(), "N");
        assert_eq!(si.newton.dimension().to_string(), "T⁻²L¹M¹I⁰ϴ⁰N⁰J⁰");
        assert_eq!(si.watt.dimension(), (&si.joule / &si.second).dimension());
        assert_eq!(si.hertz.dimension(), si.second.clone().invert().dimension());
        assert!(si.radian.is_dimensionless());
        assert_eq!(si.radian.to_string(), "rad");
    }

    #[test]
    fn conversions() {
        let si = SiUnits::new();

        let distance = Quantity::new(1.5, si.kilometer.clone());
        assert_eq!(distance.to_value(&si.meter), Ok(1500.0));

        let duration = Quantity::new(2.0, si.hour.clone());
        assert_eq!(duration.to_value(&si.minute), Ok(120.0));

        let speed = Quantity::new(36.0, &si.kilometer / &si.hour);
        assert_relative_eq!(
            speed.to_value(&(&si.meter / &si.second)).unwrap(),
            10.0,
            max_relative = 1e-12
        );

        assert!(distance.to_value(&si.second).is_err());
    }
}
