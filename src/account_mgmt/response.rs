use serde::Serialize;
use serde_json::Value;

use super::ActivationError;

const ACCOUNT_KEY: &str = "account_key";
const DATA_KEY: &str = "data_key";
const ERROR: &str = "error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivationResult {
    pub account_key: String,
    /// Empty when the service did not send one
    pub data_key: String,
}

impl ActivationResult {
    /// Parses the raw response body; bytes that are not UTF-8 are a JSON
    /// parse error like any other malformed input.
    pub fn from_body(body: &[u8]) -> Result<Self, ActivationError> {
        let json: Value = serde_json::from_slice(body)?;
        check_service_error(&json)?;

        let account_key = json
            .get(ACCOUNT_KEY)
            .ok_or_else(|| ActivationError::Schema(format!("missing '{ACCOUNT_KEY}'")))
            .and_then(|v| string_field(ACCOUNT_KEY, v))?;
        let data_key = match json.get(DATA_KEY) {
            Some(v) => string_field(DATA_KEY, v)?,
            None => String::new(),
        };

        Ok(ActivationResult {
            account_key,
            data_key,
        })
    }
}

fn string_field(name: &str, value: &Value) -> Result<String, ActivationError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ActivationError::Schema(format!("'{name}' is not a string: {value}")))
}

/// Fails if the response reports an application-level error, i.e. its root
/// is an object with a non-null `error` member.
pub fn check_service_error(json: &Value) -> Result<(), ActivationError> {
    match json.get(ERROR) {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(message)) => Err(ActivationError::Service(message.clone())),
        Some(err @ Value::Object(fields)) => Err(ActivationError::Service(
            fields
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| err.to_string()),
        )),
        // Any other non-null value counts, including `false` and `0`
        Some(other) => Err(ActivationError::Service(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_key_only() {
        let res = ActivationResult::from_body(r#"{"account_key":"AK1"}"#.as_bytes()).unwrap();
        assert_eq!(
            res,
            ActivationResult {
                account_key: "AK1".into(),
                data_key: "".into()
            }
        );
    }

    #[test]
    fn account_and_data_key() {
        let res = ActivationResult::from_body(r#"{"account_key":"AK1","data_key":"DK1"}"#.as_bytes()).unwrap();
        assert_eq!(res.account_key, "AK1");
        assert_eq!(res.data_key, "DK1");
    }

    #[test]
    fn malformed_json() {
        let res = ActivationResult::from_body(b"{not json");
        assert!(matches!(res, Err(ActivationError::JsonParse(_))));
    }

    #[test]
    fn account_key_of_wrong_type() {
        let res = ActivationResult::from_body(r#"{"account_key": 5}"#.as_bytes());
        assert!(matches!(res, Err(ActivationError::Schema(_))));
    }

    #[test]
    fn account_key_missing() {
        let res = ActivationResult::from_body(r#"{"data_key":"DK1"}"#.as_bytes());
        assert!(matches!(res, Err(ActivationError::Schema(_))));
    }

    #[test]
    fn data_key_of_wrong_type() {
        let res = ActivationResult::from_body(r#"{"account_key":"AK1","data_key":["DK1"]}"#.as_bytes());
        assert!(matches!(res, Err(ActivationError::Schema(_))));
    }

    #[test]
    fn non_object_root() {
        for body in [r#"["AK1"]"#, r#""AK1""#, "5", "null"] {
            let res = ActivationResult::from_body(body.as_bytes());
            assert!(matches!(res, Err(ActivationError::Schema(_))), "{body}");
        }
    }

    #[test]
    fn service_error_message() {
        let err = check_service_error(&json!({"error": "Invalid username or password"}));
        match err {
            Err(ActivationError::Service(msg)) => assert_eq!(msg, "Invalid username or password"),
            other => panic!("unexpected {other:?}"),
        }
        let err = check_service_error(&json!({"error": {"code": 7, "message": "2FA required"}}));
        match err {
            Err(ActivationError::Service(msg)) => assert_eq!(msg, "2FA required"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn service_error_wins_over_account_key() {
        let res = ActivationResult::from_body(r#"{"account_key":"AK1","error":true}"#.as_bytes());
        assert!(matches!(res, Err(ActivationError::Service(_))));
    }

    #[test]
    fn invalid_utf8_is_parse_error() {
        let res = ActivationResult::from_body(&[0xff, 0xfe, b'{']);
        assert!(matches!(res, Err(ActivationError::JsonParse(_))));
    }

    #[test]
    fn falsy_error_member_is_still_an_error() {
        for (body, expected) in [(json!({"error": false}), "false"), (json!({"error": 0}), "0")] {
            match check_service_error(&body) {
                Err(ActivationError::Service(msg)) => assert_eq!(msg, expected),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn null_error_is_not_an_error() {
        assert!(check_service_error(&json!({"account_key": "AK1", "error": null})).is_ok());
        assert!(check_service_error(&json!([{"error": "nested"}])).is_ok());
    }
}
