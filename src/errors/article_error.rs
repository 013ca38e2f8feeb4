//! 게시글 도메인 에러

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use super::error_body;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArticleError {
    #[error("Article not found: {0}")]
    NotFound(String),

    /// 작성자가 아닌 사용자가 수정/삭제를 시도함
    #[error("Not permitted to modify article: {0}")]
    NotPermitted(String),
}

impl ArticleError {
    pub fn code(&self) -> &'static str {
        match self {
            ArticleError::NotFound(_) => "article_not_found",
            ArticleError::NotPermitted(_) => "article_not_permitted",
        }
    }
}

impl ResponseError for ArticleError {
    fn status_code(&self) -> StatusCode {
        match self {
            ArticleError::NotFound(_) => StatusCode::NOT_FOUND,
            ArticleError::NotPermitted(_) => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(error_body(self.code(), self.to_string()))
    }
}
