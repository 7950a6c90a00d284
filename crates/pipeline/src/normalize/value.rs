//! Defaulting accessors over loosely-typed payload trees.
//!
//! Upstream providers disagree on shape, so every read through here treats a
//! missing key, a null, or a wrong-typed value the same way: fall back to the
//! caller's default. Nothing in this module fails.

use serde_json::Value;

/// Walk a nested object path, returning `None` at the first miss.
pub fn get<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    Some(current)
}

/// Numeric read widened to u64. Accepts integers and non-negative floats;
/// anything else is 0.
pub fn u64_or_zero(value: Option<&Value>) -> u64 {
    match value {
        Some(v) => v
            .as_u64()
            .or_else(|| v.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        None => 0,
    }
}

pub fn f64_or_zero(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).unwrap_or(0.0)
}

pub fn bool_or_false(value: Option<&Value>) -> bool {
    value.and_then(Value::as_bool).unwrap_or(false)
}

pub fn string_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// The items of an array, or an empty slice when the value is absent or not
/// an array.
pub fn items(value: Option<&Value>) -> &[Value] {
    value.and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

/// Collect an array of strings, silently dropping non-string entries.
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    items(value)
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_walks_nested_path() {
        let v = json!({"a": {"b": {"c": 7}}});
        assert_eq!(get(&v, &["a", "b", "c"]), Some(&json!(7)));
        assert_eq!(get(&v, &["a", "x"]), None);
        assert_eq!(get(&v, &["a", "b", "c", "d"]), None);
    }

    #[test]
    fn test_u64_or_zero_accepts_floats() {
        assert_eq!(u64_or_zero(Some(&json!(42))), 42);
        assert_eq!(u64_or_zero(Some(&json!(42.9))), 42);
        assert_eq!(u64_or_zero(Some(&json!(-3))), 0);
        assert_eq!(u64_or_zero(Some(&json!("42"))), 0);
        assert_eq!(u64_or_zero(Some(&json!(null))), 0);
        assert_eq!(u64_or_zero(None), 0);
    }

    #[test]
    fn test_string_or_renders_numbers() {
        assert_eq!(string_or(Some(&json!("$19M")), "N/A"), "$19M");
        assert_eq!(string_or(Some(&json!(19000000)), "N/A"), "19000000");
        assert_eq!(string_or(Some(&json!(null)), "N/A"), "N/A");
        assert_eq!(string_or(None, "Unknown"), "Unknown");
        assert_eq!(string_or(Some(&json!(["x"])), "N/A"), "N/A");
    }

    #[test]
    fn test_string_list_drops_non_strings() {
        let v = json!(["a", 1, null, "b"]);
        assert_eq!(string_list(Some(&v)), vec!["a", "b"]);
        assert!(string_list(Some(&json!("not-an-array"))).is_empty());
        assert!(string_list(None).is_empty());
    }

    #[test]
    fn test_items_of_non_array_is_empty() {
        assert!(items(Some(&json!({"k": 1}))).is_empty());
        assert_eq!(items(Some(&json!([1, 2]))).len(), 2);
    }
}
