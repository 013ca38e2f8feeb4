//! 토큰 도메인 에러
//!
//! 헤더 추출 단계의 실패(`NotFound`, `Malformed`)와 외부 토큰 해석기가 돌려준
//! 실패(`Expired`, `Invalid`, `UnknownSubject`)를 모두 담습니다. 해석기 쪽 실패의
//! 원인은 이 계층에서 해석하지 않고 그대로 전달만 하며, 어떤 변형이든 401로 응답합니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use super::error_body;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Authorization 헤더가 없음
    #[error("Authorization header not found")]
    NotFound,

    /// `Token <jwt>` 형식이 아님
    #[error("Authorization header must use the `Token <jwt>` scheme")]
    Malformed,

    /// 토큰 유효기간 만료
    #[error("Token has expired")]
    Expired,

    /// 서명 불일치, 디코딩 실패 등
    #[error("Invalid token: {0}")]
    Invalid(String),

    /// 토큰은 유효하지만 주체(사용자)가 더 이상 존재하지 않음
    #[error("Token subject no longer exists")]
    UnknownSubject,
}

impl TokenError {
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::NotFound => "token_not_found",
            TokenError::Malformed => "token_malformed",
            TokenError::Expired => "token_expired",
            TokenError::Invalid(_) => "token_invalid",
            TokenError::UnknownSubject => "token_unknown_subject",
        }
    }
}

impl ResponseError for TokenError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(error_body(self.code(), self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_token_error_is_unauthorized() {
        let errors = [
            TokenError::NotFound,
            TokenError::Malformed,
            TokenError::Expired,
            TokenError::Invalid("bad signature".to_string()),
            TokenError::UnknownSubject,
        ];

        for error in errors {
            assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_codes_distinguish_variants() {
        assert_eq!(TokenError::NotFound.code(), "token_not_found");
        assert_eq!(TokenError::Malformed.code(), "token_malformed");
        assert_ne!(TokenError::Expired.code(), TokenError::UnknownSubject.code());
    }
}
