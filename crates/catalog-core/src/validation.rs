//! # Create-Request Validation
//!
//! Turns a raw JSON request body into a [`NewProduct`].
//!
//! Two modes are supported:
//!
//! - [`ValidationMode::Compatible`] (default): a field counts as missing when
//!   it is falsy (`null`, `false`, `0`, `""` or absent). A present price is
//!   coerced with leading-number parsing, so `"12abc"` becomes `12` and
//!   `"abc"` becomes NaN, which is stored as-is.
//! - [`ValidationMode::Strict`]: the name must be a non-empty string and the
//!   price a finite, non-negative number (or a string holding exactly one).
//!   Zero is a valid price here.

use crate::error::{CatalogError, CatalogResult};
use crate::product::NewProduct;
use serde_json::Value;
use std::str::FromStr;

/// How strictly create requests are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    #[default]
    Compatible,
    Strict,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Compatible => "compatible",
            ValidationMode::Strict => "strict",
        }
    }
}

impl FromStr for ValidationMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compatible" => Ok(ValidationMode::Compatible),
            "strict" => Ok(ValidationMode::Strict),
            other => Err(CatalogError::Configuration(format!(
                "unknown validation mode: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a create request body and produce the input for the store
pub fn validate_new_product(body: &Value, mode: ValidationMode) -> CatalogResult<NewProduct> {
    match mode {
        ValidationMode::Compatible => validate_compatible(body),
        ValidationMode::Strict => validate_strict(body),
    }
}

fn validate_compatible(body: &Value) -> CatalogResult<NewProduct> {
    let name = body.get("name").filter(|v| is_truthy(v));
    let price = body.get("price").filter(|v| is_truthy(v));

    let (Some(name), Some(price)) = (name, price) else {
        return Err(CatalogError::Validation);
    };

    // Names are text; a truthy non-string name is treated as missing.
    let name = name.as_str().ok_or(CatalogError::Validation)?;

    Ok(NewProduct::new(name, coerce_price(price)))
}

fn validate_strict(body: &Value) -> CatalogResult<NewProduct> {
    let name = body
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or(CatalogError::Validation)?;

    let price = match body.get("price") {
        None | Some(Value::Null) => return Err(CatalogError::Validation),
        Some(Value::String(s)) if s.trim().is_empty() => return Err(CatalogError::Validation),
        Some(Value::Number(n)) => n.as_f64().ok_or(CatalogError::InvalidPrice)?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| CatalogError::InvalidPrice)?,
        Some(_) => return Err(CatalogError::InvalidPrice),
    };

    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::InvalidPrice);
    }

    Ok(NewProduct::new(name, price))
}

/// Loose truthiness: `null`, `false`, `0` and `""` are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Convert a JSON value to a price the way a leading-number parse would.
/// Anything without a numeric prefix becomes NaN.
pub fn coerce_price(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_float_prefix(s),
        // A list stringifies to its elements joined by commas, so only the
        // first element can contribute a number.
        Value::Array(items) => items.first().map(coerce_price).unwrap_or(f64::NAN),
        Value::Null | Value::Bool(_) | Value::Object(_) => f64::NAN,
    }
}

/// Parse the longest numeric prefix of `s` after leading whitespace
pub fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();

    for (literal, value) in [
        ("Infinity", f64::INFINITY),
        ("+Infinity", f64::INFINITY),
        ("-Infinity", f64::NEG_INFINITY),
    ] {
        if s.starts_with(literal) {
            return value;
        }
    }

    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compatible_accepts_name_and_price() {
        let input = validate_new_product(&json!({"name": "Mouse", "price": 25}), ValidationMode::Compatible)
            .unwrap();
        assert_eq!(input, NewProduct::new("Mouse", 25.0));
    }

    #[test]
    fn test_compatible_missing_name() {
        let err = validate_new_product(&json!({"price": 25}), ValidationMode::Compatible).unwrap_err();
        assert!(matches!(err, CatalogError::Validation));
    }

    #[test]
    fn test_compatible_falsy_values_count_as_missing() {
        for body in [
            json!({"name": "", "price": 10}),
            json!({"name": "Mouse", "price": 0}),
            json!({"name": "Mouse", "price": 0.0}),
            json!({"name": "Mouse", "price": null}),
            json!({"name": "Mouse", "price": ""}),
            json!({"name": "Mouse", "price": false}),
            json!({"name": "Mouse"}),
        ] {
            let result = validate_new_product(&body, ValidationMode::Compatible);
            assert!(matches!(result, Err(CatalogError::Validation)), "body: {}", body);
        }
    }

    #[test]
    fn test_compatible_non_object_body() {
        let result = validate_new_product(&json!(["Mouse", 25]), ValidationMode::Compatible);
        assert!(matches!(result, Err(CatalogError::Validation)));
    }

    #[test]
    fn test_compatible_coerces_numeric_string() {
        let input = validate_new_product(&json!({"name": "Mouse", "price": "19.5"}), ValidationMode::Compatible)
            .unwrap();
        assert_eq!(input.price, 19.5);
    }

    #[test]
    fn test_compatible_keeps_nan_price() {
        let input = validate_new_product(&json!({"name": "Mouse", "price": "abc"}), ValidationMode::Compatible)
            .unwrap();
        assert!(input.price.is_nan());
    }

    #[test]
    fn test_strict_accepts_zero_price() {
        let input = validate_new_product(&json!({"name": "Sticker", "price": 0}), ValidationMode::Strict).unwrap();
        assert_eq!(input.price, 0.0);
    }

    #[test]
    fn test_strict_rejects_bad_prices() {
        for price in [json!("abc"), json!("12abc"), json!(-1), json!(true), json!({"amount": 1})] {
            let body = json!({"name": "Mouse", "price": price});
            let result = validate_new_product(&body, ValidationMode::Strict);
            assert!(matches!(result, Err(CatalogError::InvalidPrice)), "body: {}", body);
        }
    }

    #[test]
    fn test_strict_missing_fields() {
        for body in [json!({"price": 1}), json!({"name": "  ", "price": 1}), json!({"name": "Mouse"})] {
            let result = validate_new_product(&body, ValidationMode::Strict);
            assert!(matches!(result, Err(CatalogError::Validation)), "body: {}", body);
        }
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("42"), 42.0);
        assert_eq!(parse_float_prefix("  3.25kg"), 3.25);
        assert_eq!(parse_float_prefix("12abc"), 12.0);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("-7."), -7.0);
        assert_eq!(parse_float_prefix("1e3x"), 1000.0);
        assert_eq!(parse_float_prefix("2e"), 2.0);
        assert_eq!(parse_float_prefix("Infinity"), f64::INFINITY);
        assert!(parse_float_prefix("abc").is_nan());
        assert!(parse_float_prefix(".").is_nan());
        assert!(parse_float_prefix("").is_nan());
    }

    #[test]
    fn test_coerce_price_values() {
        assert_eq!(coerce_price(&json!(75)), 75.0);
        assert_eq!(coerce_price(&json!(["8", 9])), 8.0);
        assert!(coerce_price(&json!(true)).is_nan());
        assert!(coerce_price(&json!({})).is_nan());
        assert!(coerce_price(&json!([])).is_nan());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("strict".parse::<ValidationMode>().unwrap(), ValidationMode::Strict);
        assert_eq!(" Compatible ".parse::<ValidationMode>().unwrap(), ValidationMode::Compatible);
        assert!("lenient".parse::<ValidationMode>().is_err());
    }
}
