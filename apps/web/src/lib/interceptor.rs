//! Classification of failed API responses. The backend answers user and
//! technical errors with an `application/vnd.error+json` envelope carrying a
//! human-readable `message`; those are shown in the session error list. Every
//! other failure is handed back to the caller untouched.

use super::api::ApiResponse;
use serde::Deserialize;
use serde_json::Value;

/// Media type of the structured error envelope.
pub const ERROR_CONTENT_TYPE: &str = "application/vnd.error+json";

/// Display severity for a reported message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorLevel {
    Warning,
    Danger,
}

impl ErrorLevel {
    /// Client errors are warnings; server and transport errors are dangers.
    pub fn for_status(status: u16) -> Self {
        if (400..500).contains(&status) {
            ErrorLevel::Warning
        } else {
            ErrorLevel::Danger
        }
    }
}

/// The `message` field of an envelope: one string, a list, or any other
/// JSON value whose string members are shown.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessages {
    One(String),
    Many(Vec<Value>),
    Other(Value),
}

impl ErrorMessages {
    /// True for values that carry nothing to report: `""`, `[]`, `false`, `0`
    /// and `null`.
    pub fn is_empty(&self) -> bool {
        match self {
            ErrorMessages::One(message) => message.is_empty(),
            ErrorMessages::Many(messages) => messages.is_empty(),
            ErrorMessages::Other(Value::Bool(flag)) => !flag,
            ErrorMessages::Other(Value::Number(number)) => number.as_f64() == Some(0.0),
            ErrorMessages::Other(Value::Null) => true,
            ErrorMessages::Other(_) => false,
        }
    }

    /// Yields the string entries in order: list items or object values.
    /// Non-string entries are skipped.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let (one, many): (Option<&str>, Box<dyn Iterator<Item = &Value> + '_>) = match self {
            ErrorMessages::One(message) => (Some(message.as_str()), Box::new(std::iter::empty())),
            ErrorMessages::Many(messages) => (None, Box::new(messages.iter())),
            ErrorMessages::Other(Value::Object(members)) => (None, Box::new(members.values())),
            ErrorMessages::Other(_) => (None, Box::new(std::iter::empty())),
        };
        one.into_iter().chain(many.filter_map(Value::as_str))
    }
}

impl From<&str> for ErrorMessages {
    fn from(message: &str) -> Self {
        ErrorMessages::One(message.to_string())
    }
}

impl From<Vec<&str>> for ErrorMessages {
    fn from(messages: Vec<&str>) -> Self {
        ErrorMessages::Many(messages.into_iter().map(Value::from).collect())
    }
}

/// A decoded error envelope ready to be appended to the error list.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorEnvelope {
    pub level: ErrorLevel,
    pub messages: ErrorMessages,
}

/// Outcome of inspecting a failed response.
#[derive(Clone, Debug, PartialEq)]
pub enum Interception {
    /// Structured envelope; show its messages and settle the call as reported.
    Report(ErrorEnvelope),
    /// Anything else; the caller handles the failure.
    Propagate,
}

#[derive(Deserialize)]
struct EnvelopeBody {
    #[serde(default)]
    message: Option<ErrorMessages>,
}

/// Inspects a non-success response.
pub fn intercept(response: &ApiResponse) -> Interception {
    if !is_error_envelope(response.content_type.as_deref()) {
        return Interception::Propagate;
    }

    let messages = match serde_json::from_str::<EnvelopeBody>(&response.body) {
        Ok(EnvelopeBody {
            message: Some(messages),
        }) if !messages.is_empty() => messages,
        _ => return Interception::Propagate,
    };

    Interception::Report(ErrorEnvelope {
        level: ErrorLevel::for_status(response.status),
        messages,
    })
}

/// Compares the media type only; parameters such as `charset` are ignored.
fn is_error_envelope(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(ERROR_CONTENT_TYPE))
}

#[cfg(test)]
mod tests {
    use super::{ErrorLevel, ErrorMessages, Interception, intercept};
    use crate::app_lib::api::ApiResponse;

    fn failure(status: u16, content_type: Option<&str>, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn envelope_with_message_is_reported() {
        let response = failure(
            400,
            Some("application/vnd.error+json"),
            r#"{"message":"Bad username or password."}"#,
        );

        match intercept(&response) {
            Interception::Report(envelope) => {
                assert_eq!(envelope.level, ErrorLevel::Warning);
                assert_eq!(
                    envelope.messages,
                    ErrorMessages::One("Bad username or password.".to_string())
                );
            }
            Interception::Propagate => panic!("expected the envelope to be reported"),
        }
    }

    #[test]
    fn server_envelopes_are_dangers() {
        let response = failure(
            500,
            Some("application/vnd.error+json; charset=utf-8"),
            r#"{"message":["Database unavailable"]}"#,
        );

        let Interception::Report(envelope) = intercept(&response) else {
            panic!("expected the envelope to be reported");
        };
        assert_eq!(envelope.level, ErrorLevel::Danger);
        assert_eq!(
            envelope.messages.iter().collect::<Vec<_>>(),
            vec!["Database unavailable"]
        );
    }

    #[test]
    fn other_content_types_propagate() {
        let response = failure(
            400,
            Some("application/json"),
            r#"{"message":"Bad username or password."}"#,
        );
        assert_eq!(intercept(&response), Interception::Propagate);

        let response = failure(502, None, "Bad gateway");
        assert_eq!(intercept(&response), Interception::Propagate);
    }

    #[test]
    fn envelopes_without_a_message_propagate() {
        let content_type = Some("application/vnd.error+json");
        for body in [
            r#"{"message":""}"#,
            r#"{"message":[]}"#,
            r#"{"detail":"nope"}"#,
            "not json",
        ] {
            let response = failure(400, content_type, body);
            assert_eq!(intercept(&response), Interception::Propagate, "{body}");
        }
    }

    #[test]
    fn non_string_messages_are_still_reported() {
        let content_type = Some("application/vnd.error+json");

        let response = failure(403, content_type, r#"{"message":{"name":"Taken","code":7}}"#);
        let Interception::Report(envelope) = intercept(&response) else {
            panic!("expected the envelope to be reported");
        };
        assert_eq!(envelope.messages.iter().collect::<Vec<_>>(), vec!["Taken"]);

        let response = failure(400, content_type, r#"{"message":5}"#);
        let Interception::Report(envelope) = intercept(&response) else {
            panic!("expected the envelope to be reported");
        };
        assert_eq!(envelope.messages.iter().count(), 0);

        for body in [r#"{"message":0}"#, r#"{"message":false}"#, r#"{"message":null}"#] {
            let response = failure(400, content_type, body);
            assert_eq!(intercept(&response), Interception::Propagate, "{body}");
        }
    }

    #[test]
    fn message_lists_skip_non_strings() {
        let messages: ErrorMessages =
            serde_json::from_str(r#"["first", 42, null, "second"]"#).expect("valid list");
        assert_eq!(messages.iter().collect::<Vec<_>>(), vec!["first", "second"]);
    }
}
