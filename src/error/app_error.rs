use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// Persistence-layer errors (`NotFound`, `Validation`, `BadRequest`) propagate to
/// the caller; delivery-layer errors (`Configuration`, `Provider`) are contained
/// at the dispatch boundary and only observable via logs.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation failures, collected by the request extractor
    #[error("Validation failed for {} field(s)", errors.len())]
    ValidationErrors { errors: Vec<ValidationFieldError> },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Provider credentials or settings are missing or unusable
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Delivery transport failure reported by a notification provider
    #[error("Provider {provider} failed: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

/// A single field failure inside a `ValidationErrors` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| ValidationFieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value for {field}")),
                })
            })
            .collect();
        AppError::ValidationErrors { errors }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "must not be empty"))]
        to: String,
    }

    #[test]
    fn validator_errors_convert_to_field_list() {
        let err = Probe { to: String::new() }.validate().unwrap_err();
        match AppError::from(err) {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "to");
                assert_eq!(errors[0].message, "must not be empty");
            }
            other => panic!("expected ValidationErrors, got {other:?}"),
        }
    }

    #[test]
    fn provider_error_display_names_the_provider() {
        let err = AppError::Provider {
            provider: "sms",
            message: "gateway returned 401".to_string(),
        };
        assert_eq!(err.to_string(), "Provider sms failed: gateway returned 401");
    }
}
