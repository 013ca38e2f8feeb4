//! # Core Module
//!
//! 어느 도메인에도 속하지 않는 공통 기능을 제공합니다.
//!
//! - [`errors`] - 최후 방어선 에러(`AppError`)와 `ErrorContext` 확장 trait

pub mod errors;

pub use errors::*;
