//! 서비스 호출 결과 에러
//!
//! 비즈니스 서비스는 자신의 도메인 에러(`Domain`) 또는 분류되지 않은 실패
//! (`Unexpected`, 비밀번호 해싱이나 토큰 서명 실패 등) 중 하나로 실패합니다.
//! 응답 변환은 감싼 에러에 그대로 위임하므로 도메인별 매핑이 섞이지 않습니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use super::{ArticleError, CommentError, UserError};
use crate::core::AppError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError<E> {
    #[error("{0}")]
    Domain(E),

    #[error("{0}")]
    Unexpected(#[from] AppError),
}

impl<E> ServiceError<E> {
    /// 도메인 에러를 꺼냅니다. 분류되지 않은 실패면 `None`.
    pub fn domain(&self) -> Option<&E> {
        match self {
            ServiceError::Domain(error) => Some(error),
            ServiceError::Unexpected(_) => None,
        }
    }
}

impl<E> ResponseError for ServiceError<E>
where
    E: ResponseError,
{
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Domain(error) => error.status_code(),
            ServiceError::Unexpected(error) => error.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Domain(error) => error.error_response(),
            ServiceError::Unexpected(error) => error.error_response(),
        }
    }
}

macro_rules! domain_error_conversion {
    ($($domain:ty),* $(,)?) => {
        $(
            impl From<$domain> for ServiceError<$domain> {
                fn from(error: $domain) -> Self {
                    ServiceError::Domain(error)
                }
            }
        )*
    };
}

domain_error_conversion!(UserError, ArticleError, CommentError);

pub type UserResult<T> = Result<T, ServiceError<UserError>>;
pub type ArticleResult<T> = Result<T, ServiceError<ArticleError>>;
pub type CommentResult<T> = Result<T, ServiceError<CommentError>>;
