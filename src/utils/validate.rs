// ============================================================================
// VALIDATE - Predicados compartidos por formatters y services
// ============================================================================

use chrono::DateTime;
use serde_json::Value;

/// True para un string con al menos un carácter
pub fn not_empty_string(value: &str) -> bool {
    !value.is_empty()
}

/// True para un slice con al menos un elemento
pub fn not_empty_array<T>(value: &[T]) -> bool {
    !value.is_empty()
}

/// True para un objeto o array JSON (no null)
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// True para un string JSON con un timestamp RFC 3339, el formato en que
/// se persisten las fechas
pub fn is_date(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings() {
        assert!(not_empty_string("a"));
        assert!(not_empty_string(" "));
        assert!(!not_empty_string(""));
    }

    #[test]
    fn arrays() {
        assert!(not_empty_array(&[1]));
        assert!(!not_empty_array::<u8>(&[]));
    }

    #[test]
    fn objects() {
        assert!(is_object(&json!({})));
        assert!(is_object(&json!({"a": 1})));
        assert!(is_object(&json!([])));
        assert!(!is_object(&Value::Null));
        assert!(!is_object(&json!("object")));
        assert!(!is_object(&json!(3)));
    }

    #[test]
    fn dates() {
        assert!(is_date(&json!("2024-11-21T15:03:00.000Z")));
        assert!(is_date(&json!("2024-11-21T15:03:00+01:00")));
        assert!(!is_date(&json!("11/21/2024")));
        assert!(!is_date(&json!(1732201380000_i64)));
        assert!(!is_date(&Value::Null));
    }
}
