//! 프레임워크 기본 에러 응답의 JSON 변환
//!
//! 도메인 에러는 각자의 `ResponseError` 구현으로 이미 JSON 본문을 가집니다. 이 핸들러는
//! 그 밖의 경로(경로 파라미터 파싱 실패, 본문 크기 초과, 처리되지 않은 패닉 등)에서
//! actix-web 이 만든 평문 에러 응답만 골라 [`AppError`] 본문으로 바꿉니다.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{Result, ResponseError};

use crate::core::AppError;

/// 모든 4xx/5xx 응답에 적용되는 에러 핸들러 미들웨어
///
/// 안쪽 미들웨어(CORS, Rate Limiting)가 본문 타입을 바꾸므로 본문 타입에 대해 제네릭입니다.
pub fn json_error_handlers<B: MessageBody + 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(render_json_error)
}

fn is_json<B>(res: &ServiceResponse<B>) -> bool {
    res.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

fn render_json_error<B: MessageBody + 'static>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    if is_json(&res) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status = res.status();
    let message = res
        .response()
        .error()
        .map(|error| error.to_string())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    let error = if status == StatusCode::INTERNAL_SERVER_ERROR {
        AppError::Unhandled(message)
    } else {
        AppError::Rejected { status, message }
    };

    let (req, original) = res.into_parts();
    let mut rendered = error.error_response();

    // CORS, Retry-After 등 원래 응답의 헤더는 유지하고 본문 관련 헤더만 교체
    for (name, value) in original.headers() {
        if *name != header::CONTENT_TYPE && *name != header::CONTENT_LENGTH {
            rendered.headers_mut().append(name.clone(), value.clone());
        }
    }

    let res = ServiceResponse::new(req, rendered).map_into_right_body::<B>();
    Ok(ErrorHandlerResponse::Response(res))
}
