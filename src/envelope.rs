//! JSON response envelopes and the writer that serializes them.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

pub const MARSHAL_ERROR: &str = "error marshalling";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessEnvelope {
    pub status: String,
}

impl SuccessEnvelope {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    Json(Vec<u8>),
    Fallback,
}

impl Encoded {
    pub fn from_payload<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_vec(payload) {
            Ok(bytes) => Encoded::Json(bytes),
            Err(err) => {
                error!("{}: {}", MARSHAL_ERROR, err);
                Encoded::Fallback
            }
        }
    }
}

/// A JSON response with an explicit status code and an optional payload.
///
/// Without a payload only the content type is written and the status stays at
/// 200. If the payload fails to serialize the response becomes a 500 carrying
/// `{"error":"error marshalling"}`.
pub struct JsonResponse<T> {
    status: StatusCode,
    payload: Option<T>,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn new(status: StatusCode, payload: T) -> Self {
        Self {
            status,
            payload: Some(payload),
        }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            payload: None,
        }
    }
}

pub fn error_response(status: StatusCode, message: &str) -> JsonResponse<ErrorEnvelope> {
    JsonResponse::new(status, ErrorEnvelope::new(message))
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        let (status, body) = match self.payload {
            None => (StatusCode::OK, Body::empty()),
            Some(payload) => match Encoded::from_payload(&payload) {
                Encoded::Json(bytes) => (self.status, Body::from(bytes)),
                Encoded::Fallback => (StatusCode::INTERNAL_SERVER_ERROR, fallback_body()),
            },
        };

        let mut response = Response::new(body);
        *response.status_mut() = status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        response
    }
}

fn fallback_body() -> Body {
    match Encoded::from_payload(&ErrorEnvelope::new(MARSHAL_ERROR)) {
        Encoded::Json(bytes) => Body::from(bytes),
        Encoded::Fallback => Body::empty(),
    }
}
