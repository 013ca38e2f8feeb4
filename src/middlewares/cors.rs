//! CORS 정책
//!
//! 모든 Origin 을 허용하며, 인증 헤더와 JSON 본문을 쓰는 메서드만 열어 둡니다.
//! 브라우저가 자동으로 붙이는 CORS-safelisted 헤더도 Preflight 에서 허용합니다.

use actix_cors::Cors;
use actix_web::http::header;

pub fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_LANGUAGE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
