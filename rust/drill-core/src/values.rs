//! Dynamically typed values with a fallible ordering.
//!
//! Numbers compare across `Int` and `Float`; strings and booleans compare
//! only with their own kind. Anything else, including a NaN float, has no
//! order and reports [`DrillError::TypeMismatch`].

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DrillError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl Value {
    /// Parse a command-line token.
    ///
    /// Tries an integer, then a finite float, then `true`/`false`. Quoted
    /// tokens (`'x'` or `"x"`) are always strings, with the quotes removed.
    /// `nan` and `inf` stay strings.
    pub fn parse(token: &str) -> Value {
        if let Some(inner) = unquote(token) {
            return Value::Str(inner.to_string());
        }
        if let Ok(i) = token.parse::<i64>() {
            return Value::Int(i);
        }
        if let Some(f) = token.parse::<f64>().ok().filter(|f| f.is_finite()) {
            return Value::Float(f);
        }
        match token {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::Str(token.to_string()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
            Value::Bool(_) => "Bool",
        }
    }

    /// Order two values, or explain why they cannot be ordered.
    pub fn try_cmp(&self, other: &Value) -> Result<Ordering> {
        let ord = match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => {
                return Err(DrillError::type_mismatch(format!(
                    "cannot compare {} with {}",
                    self.kind(),
                    other.kind()
                )))
            }
        };
        ord.ok_or_else(|| {
            DrillError::type_mismatch(format!("{} and {} have no defined order", self, other))
        })
    }
}

/// Exact `Int`/`Float` ordering. Casting the integer to `f64` would round
/// above 2^53 and break transitivity.
fn cmp_int_float(a: i64, b: f64) -> Option<Ordering> {
    if b.is_nan() {
        return None;
    }
    if b.is_infinite() {
        return Some(if b > 0.0 { Ordering::Less } else { Ordering::Greater });
    }
    let whole = b.trunc();
    // saturating cast; anything past i128 is past i64 too
    match i128::from(a).cmp(&(whole as i128)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(b - whole)),
        ord => Some(ord),
    }
}

fn unquote(token: &str) -> Option<&str> {
    if token.len() < 2 {
        return None;
    }
    ['"', '\'']
        .iter()
        .find_map(|&q| token.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_prefers_numbers() {
        assert!(matches!(Value::parse("42"), Value::Int(42)));
        assert!(matches!(Value::parse("-7"), Value::Int(-7)));
        assert!(matches!(Value::parse("2.5"), Value::Float(x) if x == 2.5));
        assert!(matches!(Value::parse("true"), Value::Bool(true)));
        assert!(matches!(Value::parse("pear"), Value::Str(ref s) if s == "pear"));
    }

    #[test]
    fn non_finite_floats_stay_strings() {
        assert!(matches!(Value::parse("nan"), Value::Str(ref s) if s == "nan"));
        assert!(matches!(Value::parse("inf"), Value::Str(ref s) if s == "inf"));
        assert!(matches!(Value::parse("-infinity"), Value::Str(_)));
        assert!(matches!(Value::parse("1e3"), Value::Float(x) if x == 1000.0));
    }

    #[test]
    fn quotes_force_strings() {
        assert!(matches!(Value::parse("'42'"), Value::Str(ref s) if s == "42"));
        assert!(matches!(Value::parse("\"true\""), Value::Str(ref s) if s == "true"));
        assert!(matches!(Value::parse("'"), Value::Str(ref s) if s == "'"));
    }

    #[test]
    fn numbers_compare_across_kinds() {
        assert_eq!(Value::Int(1).try_cmp(&Value::Float(1.5)), Ok(Ordering::Less));
        assert_eq!(Value::Float(2.0).try_cmp(&Value::Int(2)), Ok(Ordering::Equal));
        assert_eq!(Value::Int(2), Value::Float(2.0));
    }

    #[test]
    fn large_ints_compare_exactly_with_floats() {
        let two_53 = 1i64 << 53;
        let f = Value::Float(two_53 as f64);
        assert_eq!(Value::Int(two_53 + 1).try_cmp(&f), Ok(Ordering::Greater));
        assert_eq!(f.try_cmp(&Value::Int(two_53 + 1)), Ok(Ordering::Less));
        assert_eq!(Value::Int(two_53).try_cmp(&f), Ok(Ordering::Equal));
        assert_eq!(Value::Int(i64::MAX).try_cmp(&Value::Float(9.3e18)), Ok(Ordering::Less));
        assert_eq!(Value::Int(-3).try_cmp(&Value::Float(-2.5)), Ok(Ordering::Less));
        assert_eq!(Value::Int(-2).try_cmp(&Value::Float(-2.5)), Ok(Ordering::Greater));
        assert_eq!(
            Value::Int(i64::MAX).try_cmp(&Value::Float(f64::INFINITY)),
            Ok(Ordering::Less)
        );
        assert_eq!(
            Value::Int(i64::MIN).try_cmp(&Value::Float(f64::NEG_INFINITY)),
            Ok(Ordering::Greater)
        );
    }

    #[test]
    fn mismatched_kinds_do_not_compare() {
        let err = Value::Int(1).try_cmp(&Value::from("a")).unwrap_err();
        assert_eq!(err, DrillError::type_mismatch("cannot compare Int with Str"));
        assert!(Value::Bool(true).partial_cmp(&Value::Int(1)).is_none());
    }

    #[test]
    fn nan_has_no_order() {
        let err = Value::Float(f64::NAN).try_cmp(&Value::Int(0)).unwrap_err();
        assert!(matches!(err, DrillError::TypeMismatch(_)));
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn display_quotes_strings() {
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::from("hi").to_string(), "\"hi\"");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn serializes_untagged() {
        let values = vec![Value::Int(1), Value::Float(0.5), Value::from("x"), Value::Bool(true)];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[1,0.5,"x",true]"#);
        let back: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert!(matches!(back[0], Value::Int(1)));
        assert!(matches!(back[2], Value::Str(_)));
    }
}
