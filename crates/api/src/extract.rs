//! Extractors that deserialize and validate request input in one step.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use sprintboard_core::error::CoreError;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::AppError;

/// JSON body that has passed [`Validate`].
///
/// Malformed JSON, missing or mistyped fields, unknown enum tags and failed
/// field rules are all rejected as [`CoreError::Validation`] before the
/// handler body runs, so no storage session is opened for bad input.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(from_json_rejection)?;

        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::Validation(describe(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

fn from_json_rejection(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection, "Rejected request body");
    AppError::Core(CoreError::Validation(rejection.body_text()))
}

/// Path parameters that deserialized cleanly.
///
/// A segment that does not parse into `T` (non-numeric, out of range) becomes
/// a [`CoreError::Validation`] instead of axum's plain-text 400.
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(from_path_rejection)?;
        Ok(ValidatedPath(value))
    }
}

fn from_path_rejection(rejection: PathRejection) -> AppError {
    tracing::debug!(error = %rejection, "Rejected path parameters");
    AppError::Core(CoreError::Validation(rejection.body_text()))
}

/// Flatten field errors into `field: message` pairs, sorted by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |err| format!("{field}: {}", message_for(err)))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

fn message_for(err: &ValidationError) -> String {
    if let Some(msg) = &err.message {
        return msg.to_string();
    }
    match (err.code.as_ref(), err.params.get("max")) {
        ("length", Some(max)) => format!("must be at most {max} characters"),
        (code, _) => format!("failed '{code}' check"),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::routing::{get, post};
    use axum::Router;
    use http_body_util::BodyExt;
    use sprintboard_db::models::sprintgoal::SprintgoalInput;
    use tower::ServiceExt;

    use super::*;

    async fn echo_id(ValidatedPath(id): ValidatedPath<i64>) -> Json<i64> {
        Json(id)
    }

    async fn get_id(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = Router::new().route("/items/{id}", get(echo_id));
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn echo(ValidatedJson(input): ValidatedJson<SprintgoalInput>) -> Json<SprintgoalInput> {
        Json(input)
    }

    async fn send(body: &str, content_type: Option<&str>) -> (StatusCode, serde_json::Value) {
        let app = Router::new().route("/", post(echo));
        let mut builder = Request::builder().method(Method::POST).uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let response = app
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn valid_body_passes_through() {
        let (status, json) = send(
            r#"{"description": "Ship v1", "status": "Pending"}"#,
            Some("application/json"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["description"], "Ship v1");
        assert_eq!(json["status"], "Pending");
    }

    #[tokio::test]
    async fn unknown_status_is_validation_error() {
        let (status, json) = send(
            r#"{"description": "Ship v1", "status": "Blocked"}"#,
            Some("application/json"),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn overlong_description_names_the_field() {
        let body = serde_json::json!({
            "description": "x".repeat(301),
            "status": "Done",
        })
        .to_string();
        let (status, json) = send(&body, Some("application/json")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["detail"], "description: must be at most 300 characters");
    }

    #[tokio::test]
    async fn malformed_json_is_validation_error() {
        let (status, json) = send("{not json", Some("application/json")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn missing_content_type_is_validation_error() {
        let (status, _) = send(r#"{"description": "x", "status": "Done"}"#, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn numeric_path_id_passes_through() {
        let (status, json) = get_id("/items/42").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, 42);
    }

    #[tokio::test]
    async fn non_numeric_path_id_is_validation_error() {
        let (status, json) = get_id("/items/abc").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn overflowing_path_id_is_validation_error() {
        let (status, json) = get_id("/items/99999999999999999999").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}
