//! # 사용자 관련 요청 DTO
//!
//! 각 요청 타입은 [`crate::validation::Schema`]를 구현하며, 핸들러에서는
//! [`crate::validation::Validated`] 추출자로 받습니다.

pub mod login_request;
pub mod register_request;
pub mod update_user_request;

pub use login_request::LoginRequest;
pub use register_request::RegisterRequest;
pub use update_user_request::UpdateUserRequest;
