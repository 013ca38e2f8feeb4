//! # Conduit API
//!
//! Conduit(RealWorld) 블로그 플랫폼의 HTTP 요청 처리 계층입니다. 타입이 없는 JSON 요청을
//! 검증된 도메인 호출로 바꾸고, 도메인 결과와 에러를 다시 HTTP 응답으로 바꿉니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/* 엔드포인트, 기본 서비스(OPTIONS/404)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Extractors    │ ← 토큰 인증(필수/선택), 본문 스키마 검증, 쿼리 해석
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 서비스 호출, 성공 응답 래핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← trait 계약 (참조 구현: 인메모리)
//! └─────────────────┘
//! ```
//!
//! 실패는 어느 단계에서든 도메인별 에러 타입(`errors`)의 `ResponseError` 구현으로
//! 응답이 되며, 나머지 단계는 실행되지 않습니다.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validation;
