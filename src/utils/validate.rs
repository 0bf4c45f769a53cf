//! Validated request extractors.
//!
//! Runs `validator` rules against a deserialized JSON body before the handler
//! sees it, so handlers only ever receive well-formed input.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON body extractor that rejects invalid payloads with a structured
/// validation error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest {
                message: format!("Invalid JSON request: {rejection}"),
            })?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, message = "to must not be empty"))]
        to: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_body_passes() {
        let result =
            ValidatedJson::<TestBody>::from_request(json_request(r#"{"to":"+15551234567"}"#), &())
                .await;

        let ValidatedJson(body) = result.unwrap();
        assert_eq!(body.to, "+15551234567");
    }

    #[tokio::test]
    async fn failing_rules_become_validation_errors() {
        let result =
            ValidatedJson::<TestBody>::from_request(json_request(r#"{"to":""}"#), &()).await;

        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "to");
            }
            other => panic!("expected ValidationErrors, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let result =
            ValidatedJson::<TestBody>::from_request(json_request("not json"), &()).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::BadRequest { .. }
        ));
    }
}
