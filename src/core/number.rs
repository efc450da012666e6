//! Numeric values handled by the calculator.
//!
//! A [`Number`] is either an integer or a float. Integer arithmetic stays
//! integral until it overflows, at which point it is promoted to a float.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A numeric value: integer or floating-point.
///
/// Equality is numeric and exact, so `Int(5)` equals `Float(5.0)` but
/// `Int(i64::MAX)` does not equal `Float(2^63)`.
///
/// Serializes as a plain JSON number. Non-finite floats serialize as the
/// strings `"inf"`, `"-inf"` and `"NaN"` so exported history reads back.
///
/// # Example
///
/// ```rust
/// use calcstate::core::Number;
///
/// let sum = Number::Int(2) + Number::Int(3);
/// assert_eq!(sum, Number::Int(5));
///
/// let mixed = Number::Int(2) + Number::Float(0.5);
/// assert_eq!(mixed, Number::Float(2.5));
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Value as a float, widening integers.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub fn is_zero(self) -> bool {
        self.as_f64() == 0.0
    }

    /// True division. Always yields a float; `None` when `rhs` is zero.
    pub fn checked_div(self, rhs: Number) -> Option<Number> {
        if rhs.is_zero() {
            None
        } else {
            Some(Self::Float(self.as_f64() / rhs.as_f64()))
        }
    }

    /// Square root as a float; `None` for negative input.
    pub fn sqrt(self) -> Option<Number> {
        let value = self.as_f64();
        if value < 0.0 {
            None
        } else {
            Some(Self::Float(value.sqrt()))
        }
    }
}

/// 2^63, the first float above every `i64`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Exact ordering of an integer against a float, without widening the integer.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_UPPER {
        return Some(Ordering::Less);
    }
    if float < -I64_UPPER {
        return Some(Ordering::Greater);
    }

    // In range, so the truncated float is exactly representable as i64.
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        unequal => Some(unequal),
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Self::Int(i) => serializer.serialize_i64(i),
            Self::Float(f) if f.is_finite() => serializer.serialize_f64(f),
            Self::Float(f) if f.is_nan() => serializer.serialize_str("NaN"),
            Self::Float(f) if f > 0.0 => serializer.serialize_str("inf"),
            Self::Float(_) => serializer.serialize_str("-inf"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Int(i64),
    Float(f64),
    NonFinite(String),
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberRepr::deserialize(deserializer)? {
            NumberRepr::Int(i) => Ok(Self::Int(i)),
            NumberRepr::Float(f) => Ok(Self::Float(f)),
            NumberRepr::NonFinite(raw) => match raw.as_str() {
                "inf" => Ok(Self::Float(f64::INFINITY)),
                "-inf" => Ok(Self::Float(f64::NEG_INFINITY)),
                "NaN" => Ok(Self::Float(f64::NAN)),
                other => Err(serde::de::Error::custom(format!(
                    "expected a number, \"inf\", \"-inf\" or \"NaN\", found \"{other}\""
                ))),
            },
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! promoting_op {
    ($trait:ident, $method:ident, $checked:ident, $op:tt) => {
        impl $trait for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                match (self, rhs) {
                    (Self::Int(a), Self::Int(b)) => a
                        .$checked(b)
                        .map(Self::Int)
                        .unwrap_or_else(|| Self::Float(a as f64 $op b as f64)),
                    (a, b) => Self::Float(a.as_f64() $op b.as_f64()),
                }
            }
        }
    };
}

promoting_op!(Add, add, checked_add, +);
promoting_op!(Sub, sub, checked_sub, -);
promoting_op!(Mul, mul, checked_mul, *);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_arithmetic_stays_integral() {
        assert!((Number::Int(2) + Number::Int(3)).is_int());
        assert!((Number::Int(2) - Number::Int(3)).is_int());
        assert!((Number::Int(2) * Number::Int(3)).is_int());
        assert_eq!(Number::Int(2) - Number::Int(3), Number::Int(-1));
    }

    #[test]
    fn float_operand_yields_float() {
        let result = Number::Int(2) * Number::Float(1.5);
        assert!(!result.is_int());
        assert_eq!(result, Number::Float(3.0));
    }

    #[test]
    fn overflow_promotes_to_float() {
        let result = Number::Int(i64::MAX) + Number::Int(1);
        assert!(!result.is_int());
        assert_eq!(result.as_f64(), i64::MAX as f64 + 1.0);
    }

    #[test]
    fn equality_is_numeric_across_variants() {
        assert_eq!(Number::Int(5), Number::Float(5.0));
        assert_ne!(Number::Int(5), Number::Float(5.5));
        assert!(Number::Int(2) < Number::Float(2.5));
    }

    #[test]
    fn int_float_equality_is_exact_near_i64_bounds() {
        let max = Number::Int(i64::MAX);
        let two_pow_63 = Number::Float(i64::MAX as f64);
        let below_max = Number::Int(i64::MAX - 1);

        assert_ne!(max, two_pow_63);
        assert_ne!(two_pow_63, below_max);
        assert!(max < two_pow_63);
        assert!(two_pow_63 > below_max);

        assert_eq!(Number::Int(i64::MIN), Number::Float(i64::MIN as f64));
        assert!(Number::Int(i64::MIN) > Number::Float(-1e19));
    }

    #[test]
    fn int_float_ordering_respects_fractions() {
        assert!(Number::Int(2) < Number::Float(2.5));
        assert!(Number::Int(0) > Number::Float(-0.5));
        assert!(Number::Float(-2.5) < Number::Int(-2));
        assert_eq!(Number::Int(0), Number::Float(-0.0));
        assert!(Number::Int(1) < Number::Float(f64::INFINITY));
        assert!(Number::Int(1) > Number::Float(f64::NEG_INFINITY));
        assert_ne!(Number::Int(1), Number::Float(f64::NAN));
        assert!(Number::Int(1).partial_cmp(&Number::Float(f64::NAN)).is_none());
    }

    #[test]
    fn division_is_true_division() {
        assert_eq!(
            Number::Int(7).checked_div(Number::Int(2)),
            Some(Number::Float(3.5))
        );
        assert!(Number::Int(1).checked_div(Number::Float(0.0)).is_none());
    }

    #[test]
    fn sqrt_rejects_negative_values() {
        assert_eq!(Number::Int(9).sqrt(), Some(Number::Float(3.0)));
        assert!(Number::Int(-4).sqrt().is_none());
    }

    #[test]
    fn display_keeps_float_marker() {
        assert_eq!(Number::Int(5).to_string(), "5");
        assert_eq!(Number::Float(5.0).to_string(), "5.0");
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&Number::Int(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Number::Float(2.5)).unwrap(), "2.5");

        let parsed: Number = serde_json::from_str("4").unwrap();
        assert!(parsed.is_int());
        let parsed: Number = serde_json::from_str("4.25").unwrap();
        assert_eq!(parsed, Number::Float(4.25));
    }

    #[test]
    fn non_finite_floats_serialize_as_strings() {
        let json = serde_json::to_string(&[
            Number::Float(f64::INFINITY),
            Number::Float(f64::NEG_INFINITY),
            Number::Float(f64::NAN),
        ])
        .unwrap();
        assert_eq!(json, r#"["inf","-inf","NaN"]"#);

        let parsed: Vec<Number> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0], Number::Float(f64::INFINITY));
        assert_eq!(parsed[1], Number::Float(f64::NEG_INFINITY));
        assert!(parsed[2].as_f64().is_nan());
    }

    #[test]
    fn unknown_string_is_not_a_number() {
        let parsed: Result<Number, _> = serde_json::from_str(r#""ten""#);
        assert!(parsed.is_err());
    }
}
