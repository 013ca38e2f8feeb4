//! 댓글 도메인 에러

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use super::error_body;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommentError {
    #[error("Comment not found: {0}")]
    NotFound(u64),

    /// 댓글이 달릴 상위 게시글이 없음
    #[error("Article not found: {0}")]
    SlugNotFound(String),

    #[error("Not permitted to delete comment: {0}")]
    NotPermitted(u64),
}

impl CommentError {
    pub fn code(&self) -> &'static str {
        match self {
            CommentError::NotFound(_) => "comment_not_found",
            CommentError::SlugNotFound(_) => "comment_slug_not_found",
            CommentError::NotPermitted(_) => "comment_not_permitted",
        }
    }
}

impl ResponseError for CommentError {
    fn status_code(&self) -> StatusCode {
        match self {
            CommentError::NotFound(_) | CommentError::SlugNotFound(_) => StatusCode::NOT_FOUND,
            CommentError::NotPermitted(_) => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(error_body(self.code(), self.to_string()))
    }
}
