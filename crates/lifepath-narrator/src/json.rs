//! Locating JSON inside free-form model output

use serde_json::Value;

/// Extract the first JSON object or array from text that may carry
/// surrounding prose or code fences
///
/// Each `{` or `[` is tried as a start in turn. The first one that begins a
/// complete object, or an array holding only objects, wins; bracketed prose
/// such as `[2024]` is skipped. Returns `None` when nothing qualifies.
pub fn extract_json(s: &str) -> Option<&str> {
    s.char_indices()
        .filter(|&(_, c)| c == '{' || c == '[')
        .find_map(|(start, _)| {
            let rest = &s[start..];
            let mut values = serde_json::Deserializer::from_str(rest).into_iter::<Value>();
            match values.next() {
                Some(Ok(value)) if is_structured(&value) => Some(&rest[..values.byte_offset()]),
                _ => None,
            }
        })
}

fn is_structured(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Array(items) => items.iter().all(Value::is_object),
        _ => false,
    }
}
