//! Response envelope shared by every boundary function.
//!
//! Success is `{"ok": <value>}`. Failure is
//! `{"error": "<message>", "kind": "<tag>"}` where `kind` is
//! [`ModelCmpError::kind`], so callers can branch without matching on text.

use serde::Serialize;

use modelcmp_core::{ModelCmpError, Result};

#[derive(Serialize)]
struct Success<'a, T: Serialize> {
    ok: &'a T,
}

#[derive(Serialize)]
struct Failure<'a> {
    error: String,
    kind: &'a str,
}

/// Envelope for a successful value.
///
/// A value that fails to serialize is reported as an `"other"` failure.
pub fn ok_json<T: Serialize>(val: &T) -> String {
    serde_json::to_string(&Success { ok: val })
        .unwrap_or_else(|e| error_json(&ModelCmpError::Other(format!("serialization failed: {e}"))))
}

/// Envelope for an error, tagged with its kind.
pub fn error_json(err: &ModelCmpError) -> String {
    let failure = Failure {
        error: err.to_string(),
        kind: err.kind(),
    };
    serde_json::to_string(&failure)
        .unwrap_or_else(|_| r#"{"error":"serialization failed","kind":"other"}"#.into())
}

/// Wrap a boundary result in the envelope.
pub fn respond<T: Serialize>(r: Result<T>) -> String {
    match r {
        Ok(val) => ok_json(&val),
        Err(e) => error_json(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn ok_has_no_error_fields() {
        let v = parse(&respond(Ok(vec![1, 0])));
        assert_eq!(v["ok"], serde_json::json!([1, 0]));
        assert!(v.get("error").is_none());
        assert!(v.get("kind").is_none());
    }

    #[test]
    fn invalid_input_is_tagged() {
        let r: Result<i32> = Err(ModelCmpError::InvalidInput("bad".into()));
        let v = parse(&respond(r));
        assert_eq!(v["error"], "invalid input: bad");
        assert_eq!(v["kind"], "invalid_input");
    }

    #[test]
    fn parse_is_tagged() {
        let v = parse(&error_json(&ModelCmpError::Parse("eof".into())));
        assert_eq!(v["error"], "parse error: eof");
        assert_eq!(v["kind"], "parse");
    }

    #[test]
    fn unserializable_value_becomes_other() {
        // JSON object keys must be strings or numbers.
        let mut m = std::collections::BTreeMap::new();
        m.insert(vec![1u8], 1);
        let v = parse(&ok_json(&m));
        assert_eq!(v["kind"], "other");
        assert!(v["error"].as_str().unwrap().starts_with("serialization failed"));
    }
}
