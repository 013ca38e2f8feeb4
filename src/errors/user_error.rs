//! 사용자 도메인 에러

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use super::error_body;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// 이메일이 없거나 비밀번호 불일치 (어느 쪽인지 노출하지 않음)
    #[error("Email or password is invalid")]
    BadCredentials,

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Username is already taken: {0}")]
    UsernameTaken(String),

    #[error("Email is already taken: {0}")]
    EmailTaken(String),
}

impl UserError {
    pub fn code(&self) -> &'static str {
        match self {
            UserError::BadCredentials => "user_bad_credentials",
            UserError::NotFound(_) => "user_not_found",
            UserError::UsernameTaken(_) => "user_username_taken",
            UserError::EmailTaken(_) => "user_email_taken",
        }
    }
}

impl ResponseError for UserError {
    fn status_code(&self) -> StatusCode {
        match self {
            UserError::BadCredentials => StatusCode::BAD_REQUEST,
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::UsernameTaken(_) => StatusCode::BAD_REQUEST,
            UserError::EmailTaken(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(error_body(self.code(), self.to_string()))
    }
}
