//! Helpers for extracting typed parameters from a `serde_json::Value` object.
//!
//! A missing key is `None` (or an empty list) so the caller can substitute
//! its own default. A key that is present with the wrong type is
//! `StampError::ParamTypeMismatch`: silently falling back would, for example,
//! turn a mistyped seed into an unseeded sequence.

use serde_json::Value;

use crate::error::StampError;

/// Looks up `params[name]` and converts it with `extract`.
fn typed<'a, T>(
    params: &'a Value,
    name: &str,
    expected: &str,
    extract: impl FnOnce(&'a Value) -> Option<T>,
) -> Result<Option<T>, StampError> {
    let Some(value) = params.get(name) else {
        return Ok(None);
    };
    extract(value)
        .map(Some)
        .ok_or_else(|| mismatch(name, expected, value))
}

fn mismatch(name: &str, expected: &str, got: &Value) -> StampError {
    StampError::ParamTypeMismatch {
        name: name.to_owned(),
        expected: expected.to_owned(),
        got: json_type_name(got).into(),
    }
}

/// Extracts an optional `usize`. Only a non-negative JSON integer matches.
pub fn param_opt_usize(params: &Value, name: &str) -> Result<Option<usize>, StampError> {
    typed(params, name, "non-negative integer", |v| {
        v.as_u64().and_then(|n| usize::try_from(n).ok())
    })
}

/// Extracts an optional `u64`. Only a non-negative JSON integer matches.
pub fn param_opt_u64(params: &Value, name: &str) -> Result<Option<u64>, StampError> {
    typed(params, name, "non-negative integer", Value::as_u64)
}

/// Extracts an optional string slice.
pub fn param_opt_str<'a>(params: &'a Value, name: &str) -> Result<Option<&'a str>, StampError> {
    typed(params, name, "string", Value::as_str)
}

/// Extracts a list of numbers from `params[name]`.
///
/// A missing key gives an empty list. Anything other than an array of
/// numbers is `StampError::ParamTypeMismatch`.
pub fn param_f64_list(params: &Value, name: &str) -> Result<Vec<f64>, StampError> {
    const EXPECTED: &str = "array of numbers";
    let Some(items) = typed(params, name, EXPECTED, Value::as_array)? else {
        return Ok(Vec::new());
    };
    items
        .iter()
        .map(|item| item.as_f64().ok_or_else(|| mismatch(name, EXPECTED, item)))
        .collect()
}

/// Lower-case JSON type name used in error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(n) if n.is_i64() && !n.is_u64() => "negative integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn got_of(err: StampError) -> String {
        match err {
            StampError::ParamTypeMismatch { got, .. } => got,
            other => panic!("expected ParamTypeMismatch, got {other:?}"),
        }
    }

    // -- param_opt_usize --

    #[test]
    fn param_opt_usize_reads_integer_or_none() {
        assert_eq!(param_opt_usize(&json!({"count": 42}), "count").unwrap(), Some(42));
        assert_eq!(param_opt_usize(&json!({}), "count").unwrap(), None);
    }

    #[test]
    fn param_opt_usize_rejects_float_and_negative() {
        let err = param_opt_usize(&json!({"count": 2.5}), "count").unwrap_err();
        assert_eq!(got_of(err), "float");
        let err = param_opt_usize(&json!({"count": -1}), "count").unwrap_err();
        assert_eq!(got_of(err), "negative integer");
    }

    // -- param_opt_u64 --

    #[test]
    fn param_opt_u64_reads_integer_or_none() {
        assert_eq!(param_opt_u64(&json!({"seed": 42}), "seed").unwrap(), Some(42));
        assert_eq!(param_opt_u64(&json!({}), "seed").unwrap(), None);
    }

    #[test]
    fn param_opt_u64_rejects_string_seed() {
        let err = param_opt_u64(&json!({"seed": "42"}), "seed").unwrap_err();
        match err {
            StampError::ParamTypeMismatch { name, expected, got } => {
                assert_eq!(name, "seed");
                assert_eq!(expected, "non-negative integer");
                assert_eq!(got, "string");
            }
            other => panic!("expected ParamTypeMismatch, got {other:?}"),
        }
    }

    // -- param_opt_str --

    #[test]
    fn param_opt_str_reads_string_or_none() {
        let params = json!({"picker": "shuffle"});
        assert_eq!(param_opt_str(&params, "picker").unwrap(), Some("shuffle"));
        assert_eq!(param_opt_str(&params, "accumulator").unwrap(), None);
    }

    #[test]
    fn param_opt_str_rejects_number() {
        let err = param_opt_str(&json!({"picker": 3}), "picker").unwrap_err();
        assert_eq!(got_of(err), "number");
    }

    #[test]
    fn non_object_params_have_no_keys() {
        let params = json!("not an object");
        assert_eq!(param_opt_str(&params, "picker").unwrap(), None);
        assert!(param_f64_list(&params, "values").unwrap().is_empty());
    }

    // -- param_f64_list --

    #[test]
    fn param_f64_list_reads_mixed_integers_and_floats() {
        let params = json!({"values": [1, 2.5, -3]});
        assert_eq!(param_f64_list(&params, "values").unwrap(), vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn param_f64_list_missing_is_empty() {
        assert!(param_f64_list(&json!({}), "values").unwrap().is_empty());
    }

    #[test]
    fn param_f64_list_rejects_non_array() {
        let err = param_f64_list(&json!({"values": "1,2,3"}), "values").unwrap_err();
        match err {
            StampError::ParamTypeMismatch { name, got, .. } => {
                assert_eq!(name, "values");
                assert_eq!(got, "string");
            }
            other => panic!("expected ParamTypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn param_f64_list_rejects_non_numeric_item() {
        let err = param_f64_list(&json!({"values": [1, null]}), "values").unwrap_err();
        assert_eq!(got_of(err), "null");
    }
}
