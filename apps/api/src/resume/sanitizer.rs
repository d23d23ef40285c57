//! Response Sanitizer — strips code-fence markup from model output and parses
//! what is left as JSON. No schema validation: whatever parses is passed on.

use serde_json::Value;

use crate::llm_client::LlmError;

/// Removes every ```` ```json ```` and ```` ``` ```` marker, wherever it
/// appears, then trims surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn sanitize_and_parse(raw: &str) -> Result<Value, LlmError> {
    Ok(serde_json::from_str(&strip_code_fences(raw))?)
}

const STRING_FIELDS: [&str; 3] = ["name", "email", "phone"];

/// Differences between `record` and the expected resume shape, for logging.
/// An empty result means the record looks like a resume.
pub fn shape_warnings(record: &Value) -> Vec<String> {
    let Some(obj) = record.as_object() else {
        return vec![format!("expected a JSON object, got {}", json_kind(record))];
    };

    let mut warnings = Vec::new();

    for key in STRING_FIELDS {
        match obj.get(key) {
            None => warnings.push(format!("missing '{key}'")),
            Some(Value::String(_)) | Some(Value::Null) => {}
            Some(v) => warnings.push(format!("'{key}' is {}, expected string", json_kind(v))),
        }
    }

    match obj.get("skills") {
        None => warnings.push("missing 'skills'".to_string()),
        Some(Value::Array(items)) => {
            if items.iter().any(|s| !s.is_string()) {
                warnings.push("'skills' contains non-string entries".to_string());
            }
        }
        Some(v) => warnings.push(format!("'skills' is {}, expected array", json_kind(v))),
    }

    check_entries(obj.get("education"), "education", &["degree", "institution"], &mut warnings);
    check_entries(
        obj.get("experience"),
        "experience",
        &["job_title", "company", "duration"],
        &mut warnings,
    );

    warnings
}

fn check_entries(value: Option<&Value>, key: &str, fields: &[&str], warnings: &mut Vec<String>) {
    let items = match value {
        None => {
            warnings.push(format!("missing '{key}'"));
            return;
        }
        Some(Value::Array(items)) => items,
        Some(v) => {
            warnings.push(format!("'{key}' is {}, expected array", json_kind(v)));
            return;
        }
    };

    for (i, item) in items.iter().enumerate() {
        match item.as_object() {
            Some(entry) => {
                for field in fields {
                    if !entry.contains_key(*field) {
                        warnings.push(format!("'{key}[{i}]' missing '{field}'"));
                    }
                }
            }
            None => warnings.push(format!("'{key}[{i}]' is {}, expected object", json_kind(item))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
