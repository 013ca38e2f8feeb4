//! # HTTP 핸들러
//!
//! 각 핸들러는 추출자 순서대로 파이프라인을 밟습니다.
//!
//! 1. 인증: [`crate::domain::CurrentUser`] (필수) 또는 [`crate::domain::OptionalUser`] (선택)
//! 2. 검증: [`crate::validation::Validated`] 본문, 쿼리 파라미터
//! 3. 서비스 호출: 실패하면 `?`로 해당 도메인의 에러 응답
//! 4. 성공 응답 래핑

pub mod articles;
pub mod comments;
pub mod health;
pub mod profiles;
pub mod tags;
pub mod users;
