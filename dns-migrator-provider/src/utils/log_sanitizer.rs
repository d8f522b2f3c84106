//! Log sanitization utilities
//!
//! Keeps session tokens and passwords out of debug logs, and caps the size of
//! logged bodies (zone dumps can be large).

use serde_json::Value;

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// JSON keys whose values are never logged.
const SECRET_KEYS: &[&str] = &["token", "password", "auth-token"];

const MASK: &str = "***";

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned as is; longer ones are cut at a
/// character boundary and suffixed with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

fn mask_secrets(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map.iter_mut() {
                if SECRET_KEYS.iter().any(|k| key.eq_ignore_ascii_case(k)) {
                    *v = Value::String(MASK.to_string());
                } else {
                    mask_secrets(v);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask_secrets),
        _ => {}
    }
}

/// Mask secret fields of a JSON body, then truncate it.
///
/// Non-JSON bodies (XML, HTML error pages) are only truncated.
pub fn sanitize_for_log(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(mut value) if value.is_object() || value.is_array() => {
            mask_secrets(&mut value);
            truncate_for_log(&value.to_string())
        }
        _ => truncate_for_log(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "é".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total 400 bytes]"));
    }

    #[test]
    fn session_token_is_masked() {
        let body = r#"{"status":"success","data":{"token":"abc123","version":"3.7"},"job_id":1,"msgs":[]}"#;
        let result = sanitize_for_log(body);
        assert!(!result.contains("abc123"));
        assert!(result.contains(r#""token":"***""#));
        assert!(result.contains(r#""version":"3.7""#));
    }

    #[test]
    fn password_in_nested_array_is_masked() {
        let body = r#"[{"user":{"Password":"hunter2"}}]"#;
        let result = sanitize_for_log(body);
        assert!(!result.contains("hunter2"));
    }

    #[test]
    fn xml_body_only_truncated() {
        let body = "<ChangeInfo><Id>/change/C1</Id></ChangeInfo>";
        assert_eq!(sanitize_for_log(body), body);
    }
}
