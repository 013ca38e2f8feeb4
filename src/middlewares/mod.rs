//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 담당합니다.
//!
//! - [`auth`]: `Token <jwt>` 헤더 해석과 필수/선택 인증 모드
//! - [`error_handlers`]: 프레임워크가 만든 평문 에러 응답을 JSON 본문으로 변환
//! - [`cors`]: CORS 정책
//!
//! 실제 감싸는 순서는 [`crate::app::create_app`]에 있습니다. 에러 핸들러는 CORS 바깥에
//! 있어야 CORS 거부와 Rate Limiting 429 도 JSON 본문으로 바뀝니다.

pub mod auth;
pub mod cors;
pub mod error_handlers;

pub use auth::{authenticate, bearer_token, AuthMode, TOKEN_SCHEME};
pub use cors::configure_cors;
pub use error_handlers::json_error_handlers;
