// src/domain/amenities.rs

use serde_json::Value;

/// Normalize the `amenities` column into a list of tags.
///
/// The column shows up as a native array, as a JSON array serialized into a
/// string (often CSV-escaped with doubled quotes), or as a loosely delimited
/// string such as `{TV,Wifi,"Air conditioning"}`.
pub fn parse_amenities(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(items) => from_items(items),
        Value::String(s) => {
            let unescaped = s.replace("\"\"", "\"");
            match serde_json::from_str::<Value>(&unescaped) {
                Ok(Value::Array(items)) => from_items(&items),
                _ => split_delimited(s),
            }
        }
        _ => Vec::new(),
    }
}

// Items pass through unchanged; only their display text is taken.
fn from_items(items: &[Value]) -> Vec<String> {
    items.iter().map(display_text).collect()
}

fn display_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(inner) => inner.iter().map(display_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

// Fallback when the string isn't valid JSON.
fn split_delimited(s: &str) -> Vec<String> {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '{' | '}' | '"'))
        .collect();

    cleaned
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}
