//! # 요청/응답 DTO
//!
//! 요청 DTO 는 [`crate::validation::Schema`]로 원본 JSON 에서 검증과 함께 만들어지고,
//! 응답 DTO 는 Conduit 와이어 형식(camelCase)으로 직렬화됩니다.

pub mod articles;
pub mod comments;
pub mod users;
