//! # 요청 본문 검증
//!
//! 필드 규칙([`rules`])을 객체 스키마([`schema`])로 조합하고, [`Validated`] 추출자로
//! 핸들러 앞단에서 평가합니다. 실패 시 결과는 점(.) 경로로 주소가 매겨진 필드 에러
//! 맵이며, 한 번의 평가로 모든 필드의 에러가 수집됩니다.

pub mod extractor;
pub mod rules;
pub mod schema;

pub use extractor::Validated;
pub use rules::Rule;
pub use schema::{parse_payload, validate_document, ObjectValidator, Schema};
