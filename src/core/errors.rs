//! # 최후 방어선 에러 처리
//!
//! 도메인(토큰/사용자/게시글/댓글)에 속하지 않는 모든 실패를 담당합니다.
//! 각 도메인 에러는 `crate::errors` 아래에 독립된 타입으로 존재하며,
//! 이 모듈의 [`AppError`]는 어느 도메인으로도 분류되지 않는 실패를
//! 구조화된 JSON 본문으로 돌려주는 "unknown error handler" 역할만 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | code |
//! |----------|-------------|------|
//! | `Unhandled` | 500 Internal Server Error | `unknown` |
//! | `RouteNotFound` | 404 Not Found | `route_not_found` |
//! | `Rejected` | 프레임워크가 정한 상태 코드 | `request_rejected` |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "errors": {
//!     "code": "unknown",
//!     "message": "비밀번호 해싱 실패: invalid cost"
//!   }
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::errors::error_body;

/// 분류되지 않은 실패를 나타내는 애플리케이션 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 예상하지 못한 내부 오류 (500)
    ///
    /// 원본 에러 메시지를 그대로 본문에 담습니다.
    #[error("{0}")]
    Unhandled(String),

    /// 등록되지 않은 경로 (404)
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// actix-web 이 직접 거부한 요청 (경로 파라미터 파싱 실패, 본문 크기 초과 등)
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl AppError {
    /// 응답 본문에 실리는 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unhandled(_) => "unknown",
            AppError::RouteNotFound(_) => "route_not_found",
            AppError::Rejected { .. } => "request_rejected",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Rejected { status, .. } => *status,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Unhandled(message) = self {
            log::error!("처리되지 않은 에러: {}", message);
        }

        HttpResponse::build(self.status_code()).json(error_body(self.code(), self.to_string()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hashed = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Unhandled(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::Unhandled(format!("{}: {}", f(), e)))
    }
}
