//! 요청 본문 에러
//!
//! 본문이 JSON 자체로 해석되지 않는 경우(`Malformed`)와, JSON 은 올바르지만 스키마
//! 검증에 실패한 경우(`Invalid`)를 구분합니다. 두 경우 모두 422로 응답합니다.
//!
//! ```json
//! { "errors": "Malformed JSON payload" }
//! { "errors": { "user.email": ["Not a valid email"], "user.username": ["Minimum length is 3"] } }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

pub const MALFORMED_JSON_PAYLOAD: &str = "Malformed JSON payload";

/// 점(.)으로 구분된 필드 경로 → 에러 메시지 목록
///
/// 키는 유일하며, 필드가 처음 실패한 순서(스키마 선언 순서)대로 직렬화됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_default().push(message.into());
    }

    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.0.get(path).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Malformed JSON payload")]
    Malformed,

    #[error("Validation failed for {} field(s)", .0.len())]
    Invalid(FieldErrors),
}

impl ResponseError for PayloadError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            PayloadError::Malformed => json!({ "errors": MALFORMED_JSON_PAYLOAD }),
            PayloadError::Invalid(fields) => json!({ "errors": fields }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
