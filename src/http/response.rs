//! Response bodies
//!
//! The wire contract is minimal: list and get return records directly,
//! mutations and preflights return an empty JSON object, and errors are
//! `{"error": "<message>"}`.

use serde::Serialize;

/// Empty success object (`{}`) returned by update, delete, and preflight
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Empty {}

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&Empty {}).unwrap(), "{}");
    }

    #[test]
    fn test_error_body_has_only_the_error_key() {
        let value = serde_json::to_value(ErrorBody {
            error: "boom".to_string(),
        })
        .unwrap();

        assert_eq!(value["error"], "boom");
        assert_eq!(value.as_object().unwrap().len(), 1);
    }
}
