//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소에 보관되는 사용자/게시글/댓글
//! ├── dto       - 검증되는 요청과 와이어 형식 응답
//! └── models    - 요청 범위 식별 정보, JWT 클레임
//! ```
//!
//! 엔티티는 외부로 직접 직렬화되지 않습니다. 응답은 항상 요청자 관점
//! (`following`, `favorited`)이 반영된 DTO 로 변환되어 나갑니다.

pub mod dto;
pub mod entities;
pub mod models;

pub use models::auth::{CurrentUser, OptionalUser};
