use compact_str::CompactString;
use num_rational::Ratio;

pub type Rational = Ratio<i128>;
pub type Exponent = Rational;

pub trait Power {
    fn power(self, e: Exponent) -> Self;

    fn invert(self) -> Self
    where
        Self: Sized,
    {
        self.power(Exponent::from_integer(-1))
    }

    fn powi(self, e: i128) -> Self
    where
        Self: Sized,
    {
        self.power(Exponent::from_integer(e))
    }
}

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// There is no superscript solidus in Unicode, the "dotted solidus" is the
/// closest glyph that still reads as a fraction bar between superscripts.
const FRACTION_SLASH: char = '⸍';

/// Renders an integer with superscript digits, e.g. `-12` as `⁻¹²`.
pub fn superscript(n: i128) -> CompactString {
    let mut result = CompactString::default();
    if n.is_negative() {
        result.push('⁻');
    }
    for digit in n.unsigned_abs().to_string().bytes() {
        result.push(SUPERSCRIPT_DIGITS[usize::from(digit - b'0')]);
    }
    result
}

/// Renders an exponent in superscript form: `²`, `⁻¹`, `⁰` or `¹⸍²`.
pub fn pretty_exponent(e: &Exponent) -> CompactString {
    if e.is_integer() {
        superscript(*e.numer())
    } else {
        let mut result = superscript(*e.numer());
        result.push(FRACTION_SLASH);
        result.push_str(&superscript(*e.denom()));
        result
    }
}

/// Lossy conversion used wherever an exponent is applied to a floating point
/// multiplier or value.
pub fn exponent_to_f64(e: &Exponent) -> f64 {
    *e.numer() as f64 / *e.denom() as f64
}

/// Raises a floating point number to a rational power. Integer exponents go
/// through `powi` so that `x.power(2)` matches `x * x` bit for bit.
pub fn float_power(x: f64, e: &Exponent) -> f64 {
    match i32::try_from(*e.numer()) {
        Ok(n) if e.is_integer() => x.powi(n),
        _ => x.powf(exponent_to_f64(e)),
    }
}
