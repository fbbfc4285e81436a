use letterbox_models::contact::ContactSubmission;
use serde_json::{Map, Value};

/// Parse the raw request body into a [`ContactSubmission`].
///
/// A missing or empty body is treated as `{}` and so is any valid JSON
/// document that is not an object. Fields that are not strings count as
/// missing, except for the honeypot where `null`, `false` and `0` count as
/// empty and any other value counts as filled.
pub fn parse_submission(body: Option<&str>) -> serde_json::Result<ContactSubmission> {
    let body = body.filter(|body| !body.is_empty()).unwrap_or("{}");

    let Value::Object(fields) = serde_json::from_str::<Value>(body)? else {
        return Ok(ContactSubmission::default());
    };

    Ok(ContactSubmission {
        name: text(&fields, "name"),
        email: text(&fields, "email"),
        message: text(&fields, "message"),
        honeypot: fields.get("honeypot").and_then(honeypot),
    })
}

fn text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key)?.as_str().map(Into::into)
}

fn honeypot(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(value) => Some(value.clone()),
        value => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn full() {
        let submission = parse_submission(Some(
            r#"{"name": "Max", "email": "max@example.de", "message": "Hi", "honeypot": ""}"#,
        ))
        .unwrap();

        assert_eq!(
            submission,
            ContactSubmission {
                name: Some("Max".into()),
                email: Some("max@example.de".into()),
                message: Some("Hi".into()),
                honeypot: Some("".into()),
            }
        );
    }

    #[test]
    fn empty_body() {
        for body in [None, Some(""), Some("{}"), Some("[]"), Some("42"), Some("null")] {
            assert_eq!(
                parse_submission(body).unwrap(),
                ContactSubmission::default(),
                "{body:?}"
            );
        }
    }

    #[test]
    fn non_string_fields() {
        let submission =
            parse_submission(Some(r#"{"name": 42, "email": null, "message": ["Hi"]}"#)).unwrap();

        assert_eq!(submission, ContactSubmission::default());
    }

    #[test]
    fn non_string_honeypot() {
        for (honeypot, expected) in [
            ("null", None),
            ("false", None),
            ("0", None),
            ("0.0", None),
            ("-0", None),
            ("true", Some("true")),
            ("1", Some("1")),
            ("{}", Some("{}")),
        ] {
            let submission =
                parse_submission(Some(&format!(r#"{{"honeypot": {honeypot}}}"#))).unwrap();
            assert_eq!(submission.honeypot.as_deref(), expected, "{honeypot}");
        }
    }

    #[test]
    fn invalid_json() {
        for body in ["not valid json {", "{", r#"{"name": "Max",}"#] {
            assert!(parse_submission(Some(body)).is_err(), "{body}");
        }
    }
}
