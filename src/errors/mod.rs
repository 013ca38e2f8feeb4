//! # 도메인별 에러 디스패치
//!
//! 각 기능 영역(토큰, 사용자, 게시글, 댓글)은 서로 독립된 닫힌 에러 열거형을 가집니다.
//! 공통 기반 타입은 없으며, 어떤 HTTP 상태로 응답할지는 서비스 호출이 **어느 도메인의
//! 에러를 반환했는가**로 결정됩니다. 각 열거형이 `actix_web::ResponseError`를 직접
//! 구현하므로, 핸들러에서 `?` 한 번으로 해당 도메인의 매핑이 적용되고 나머지 처리 단계는
//! 건너뛰게 됩니다.
//!
//! ## 상태 코드 매핑
//!
//! | 도메인 | 변형 | 상태 |
//! |--------|------|------|
//! | Token | 모든 변형 | 401 |
//! | User | `BadCredentials` / `UsernameTaken` / `EmailTaken` | 400 |
//! | User | `NotFound` | 404 |
//! | Article | `NotFound` | 404 |
//! | Article | `NotPermitted` | 403 |
//! | Comment | `NotFound` / `SlugNotFound` | 404 |
//! | Comment | `NotPermitted` | 403 |
//! | Payload | `Invalid` (필드 에러) / `Malformed` | 422 |
//!
//! 분류되지 않은 실패는 [`crate::core::AppError`]가 500으로 처리합니다.

pub mod article_error;
pub mod comment_error;
pub mod payload_error;
pub mod service_error;
pub mod token_error;
pub mod user_error;

pub use article_error::ArticleError;
pub use comment_error::CommentError;
pub use payload_error::{FieldErrors, PayloadError};
pub use service_error::{ArticleResult, CommentResult, ServiceError, UserResult};
pub use token_error::TokenError;
pub use user_error::UserError;

use serde_json::{json, Value};

/// 도메인 에러의 표준 JSON 본문을 생성합니다.
///
/// ```json
/// { "errors": { "code": "article_not_permitted", "message": "..." } }
/// ```
pub fn error_body(code: &str, message: impl Into<String>) -> Value {
    json!({
        "errors": {
            "code": code,
            "message": message.into(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = error_body("user_not_found", "User not found: jake");

        assert_eq!(body["errors"]["code"], "user_not_found");
        assert_eq!(body["errors"]["message"], "User not found: jake");
    }
}
