//! Defines the structure mirroring the deep-clean response JSON.

use serde::Deserialize;

use crate::core::error::Result;
use crate::core::models::{EmailResult, EmailStatus};

/// Wire shape of a deep-clean response body.
///
/// The API reports every field as a string apart from `error_code`, and
/// encodes the flags as `"yes"`/`"no"` literals rather than JSON booleans.
/// Absent string fields decode as empty strings, matching how the API mixes
/// result fields and error fields in one flat object.
#[derive(Deserialize, Debug, Default, Clone)]
pub(crate) struct DeepCleanResponse {
    #[serde(default)]
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) free_mail: String,
    #[serde(default)]
    pub(crate) typo_fixed: String,
    #[serde(default)]
    pub(crate) email_status: String,
    pub(crate) error_code: Option<i64>,
    pub(crate) error_msg: Option<String>,
}

impl DeepCleanResponse {
    /// Builds the caller-facing result from a response that carried a
    /// non-empty `email_status`.
    pub(crate) fn into_result(self) -> Result<EmailResult> {
        let status = EmailStatus::from_wire_str(&self.email_status)?;
        Ok(EmailResult::new(
            self.email,
            status,
            yes_no(&self.free_mail),
            yes_no(&self.typo_fixed),
        ))
    }
}

/// `"yes"` in any letter case is true; every other value, absent included,
/// is false.
fn yes_no(value: &str) -> bool {
    value.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ClientError;

    fn decode(body: &str) -> DeepCleanResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn full_response_maps_to_result() {
        let response = decode(
            r#"{
                "email": "user@example.com",
                "free_mail": "no",
                "typo_fixed": "yes",
                "email_status": "clean"
            }"#,
        );
        let result = response.into_result().unwrap();
        assert_eq!(result.email, "user@example.com");
        assert_eq!(result.status, EmailStatus::Clean);
        assert!(!result.is_free);
        assert!(result.typos_fixed);
    }

    #[test]
    fn free_mail_flag_is_case_insensitive() {
        for value in ["yes", "Yes", "YES"] {
            let response = decode(&format!(
                r#"{{"email":"a@b.c","free_mail":"{value}","email_status":"clean"}}"#
            ));
            assert!(response.into_result().unwrap().is_free, "value {value}");
        }
        for body in [
            r#"{"email":"a@b.c","free_mail":"no","email_status":"clean"}"#,
            r#"{"email":"a@b.c","email_status":"clean"}"#,
        ] {
            assert!(!decode(body).into_result().unwrap().is_free);
        }
    }

    #[test]
    fn absent_email_decodes_as_empty_string() {
        let response = decode(r#"{"email_status":"unknown"}"#);
        let result = response.into_result().unwrap();
        assert_eq!(result.email, "");
        assert_eq!(result.status, EmailStatus::Unknown);
    }

    #[test]
    fn unrecognized_status_fails_construction() {
        let response = decode(r#"{"email":"a@b.c","email_status":"quarantined"}"#);
        let err = response.into_result().unwrap_err();
        assert!(matches!(err, ClientError::UnknownStatus(raw) if raw == "quarantined"));
    }

    #[test]
    fn error_fields_decode_alongside_result_fields() {
        let response = decode(r#"{"error_code":42,"error_msg":"quota exceeded"}"#);
        assert_eq!(response.error_code, Some(42));
        assert_eq!(response.error_msg.as_deref(), Some("quota exceeded"));
        assert!(response.email_status.is_empty());
    }
}
