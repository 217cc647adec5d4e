use crate::imports::*;
use polars::prelude::AnyValue;
use tera::Number;

/*
    Functions:
    * scalar_text - Trimmed, non-empty text form of a scalar (strings and numbers only)
    * scalar_number - Finite f64 form of a scalar, parsing strings
    * anyvalue_to_scalar - Converts a polars cell into a ScalarValue, None for nulls
*/
pub fn scalar_text(value: &ScalarValue) -> Option<String> {
    match value {
        ScalarValue::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        ScalarValue::Number(n) => Some(n.to_string()),
        ScalarValue::Null | ScalarValue::Bool(_) | ScalarValue::Array(_) | ScalarValue::Object(_) => {
            None
        }
    }
}

pub fn scalar_number(value: &ScalarValue) -> Option<f64> {
    let parsed = match value {
        ScalarValue::Number(n) => n.as_f64(),
        ScalarValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

pub fn anyvalue_to_scalar(av: &AnyValue) -> Option<ScalarValue> {
    match av {
        AnyValue::Null => None,
        AnyValue::Boolean(b) => Some(ScalarValue::Bool(*b)),
        AnyValue::String(s) => Some(ScalarValue::String(s.to_string())),
        AnyValue::StringOwned(s) => Some(ScalarValue::String(s.to_string())),
        AnyValue::Int64(i) => Some(ScalarValue::Number((*i).into())),
        AnyValue::Int32(i) => Some(ScalarValue::Number((*i as i64).into())),
        AnyValue::Int16(i) => Some(ScalarValue::Number((*i as i64).into())),
        AnyValue::Int8(i) => Some(ScalarValue::Number((*i as i64).into())),
        AnyValue::UInt64(u) => Some(ScalarValue::Number((*u).into())),
        AnyValue::UInt32(u) => Some(ScalarValue::Number((*u as u64).into())),
        AnyValue::UInt16(u) => Some(ScalarValue::Number((*u as u64).into())),
        AnyValue::UInt8(u) => Some(ScalarValue::Number((*u as u64).into())),
        AnyValue::Float64(f) => f64_to_scalar(*f),
        AnyValue::Float32(f) => f64_to_scalar(*f as f64),
        other => Some(ScalarValue::String(other.to_string())),
    }
}

fn f64_to_scalar(v: f64) -> Option<ScalarValue> {
    Number::from_f64(v).map(ScalarValue::Number)
}
