//! Output formatting
//!
//! Turns a built list into indented JSON and a source failure into the
//! one-line diagnostic written to the error stream.

use serde::Serialize;
use std::fmt::Display;

/// Prefix of every failure line
pub const FAILURE_PREFIX: &str = "Failed to build list:";

/// JSON formatter used by the pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        JsonFormatter
    }

    /// Format a list as pretty JSON, two spaces per nesting level.
    ///
    /// Keys and elements keep the order in which `list` serializes them.
    /// No trailing newline is added.
    pub fn format_list<T: Serialize + ?Sized>(&self, list: &T) -> serde_json::Result<String> {
        serde_json::to_string_pretty(list)
    }

    /// Format a failure for the error stream
    pub fn format_failure(&self, failure: &dyn Display) -> String {
        // {:#} keeps the whole anyhow context chain on one line
        format!("{} {:#}", FAILURE_PREFIX, failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_nested_object() {
        let formatter = JsonFormatter::new();
        let list = json!({"a": 1, "b": [2, 3]});

        let text = formatter.format_list(&list).unwrap();
        assert_eq!(text, "{\n  \"a\": 1,\n  \"b\": [\n    2,\n    3\n  ]\n}");
    }

    #[test]
    fn test_format_empty_collections() {
        let formatter = JsonFormatter::new();

        assert_eq!(formatter.format_list(&json!([])).unwrap(), "[]");
        assert_eq!(formatter.format_list(&json!({})).unwrap(), "{}");
    }

    #[test]
    fn test_format_scalars() {
        let formatter = JsonFormatter::new();

        assert_eq!(formatter.format_list(&json!(null)).unwrap(), "null");
        assert_eq!(formatter.format_list(&json!("milk")).unwrap(), "\"milk\"");
        assert_eq!(formatter.format_list(&json!(2.5)).unwrap(), "2.5");
    }

    #[test]
    fn test_format_keeps_document_order() {
        let formatter = JsonFormatter::new();
        let list: serde_json::Value =
            serde_json::from_str(r#"{"zucchini": 3, "apples": 6, "milk": 1}"#).unwrap();

        let text = formatter.format_list(&list).unwrap();
        let zucchini = text.find("zucchini").unwrap();
        let apples = text.find("apples").unwrap();
        let milk = text.find("milk").unwrap();
        assert!(zucchini < apples && apples < milk);
    }

    #[test]
    fn test_format_struct_field_order() {
        #[derive(Serialize)]
        struct Item {
            name: &'static str,
            quantity: u32,
            tags: Vec<&'static str>,
        }

        let formatter = JsonFormatter::new();
        let items = vec![Item { name: "eggs", quantity: 12, tags: vec!["fresh"] }];

        let text = formatter.format_list(&items).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"name\": \"eggs\",\n    \"quantity\": 12,\n    \"tags\": [\n      \"fresh\"\n    ]\n  }\n]"
        );
    }

    #[test]
    fn test_format_failure() {
        let formatter = JsonFormatter::new();
        let failure = anyhow::anyhow!("network timeout");

        assert_eq!(
            formatter.format_failure(&failure),
            "Failed to build list: network timeout"
        );
    }

    #[test]
    fn test_format_failure_with_context() {
        let formatter = JsonFormatter::new();
        let failure = anyhow::anyhow!("connection reset").context("fetching groceries");

        assert_eq!(
            formatter.format_failure(&failure),
            "Failed to build list: fetching groceries: connection reset"
        );
    }
}
