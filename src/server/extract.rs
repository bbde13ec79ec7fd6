use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::Form;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Request body decoded from JSON or form encoding.
///
/// Bodies with any other content type, and empty JSON bodies, decode as
/// `T::default()` so that field validation reports what is missing.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(req.headers()) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| rejection(e.status(), e.body_text()))?;
                if bytes.is_empty() {
                    return Ok(Payload(T::default()));
                }
                serde_json::from_slice(&bytes)
                    .map(Payload)
                    .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))
            }
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| rejection(e.status(), e.body_text()))?;
                Ok(Payload(value))
            }
            BodyKind::Other => Ok(Payload(T::default())),
        }
    }
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return BodyKind::Other;
    };
    let mime = content_type.split(';').next().unwrap_or("").trim();

    if mime.eq_ignore_ascii_case("application/json") {
        BodyKind::Json
    } else if mime.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

fn rejection(status: StatusCode, message: String) -> ApiError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(message)
    } else {
        ApiError::BadRequest(message)
    }
}
