//! The API's wire error shape: `{message}` plus, for validation failures,
//! a field-level `errors` list.

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// One failed field in a write payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Error body for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// Flatten a `validator` error set into the wire's field-level list,
/// sorted by field name so responses are stable.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = Vec::new();
    for (field, failures) in errors.field_errors() {
        for failure in failures {
            out.push(FieldError {
                field: field.to_string(),
                message: failure
                    .message
                    .as_deref()
                    .map(str::to_owned)
                    .unwrap_or_else(|| failure.code.to_string()),
            });
        }
    }
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "Not a valid email address"))]
        email: String,
    }

    #[test]
    fn flattens_validation_errors_with_their_messages() {
        let probe = Probe {
            email: "nope".to_string(),
        };
        let flat = field_errors(&probe.validate().unwrap_err());
        assert_eq!(
            flat,
            vec![FieldError {
                field: "email".to_string(),
                message: "Not a valid email address".to_string(),
            }]
        );
    }

    #[test]
    fn errors_list_is_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::new("Game not found")).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Game not found"}));
    }
}
