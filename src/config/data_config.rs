//! 서버 및 실행 환경 설정
//!
//! 모든 값은 시작 시 한 번 읽히며, 요청 처리 중에는 환경 변수를 다시 보지 않습니다.
//! 해석 함수는 `lookup` 클로저를 받으므로 프로세스 환경을 건드리지 않고 테스트됩니다.

use std::str::FromStr;

/// 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// TLS 인증서 경로 (PEM)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    pub cert_path: String,
    pub key_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `ENABLE_HTTPS`가 꺼져 있으면 `None`
    pub tls: Option<TlsConfig>,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 3000;

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let tls = parse_flag(lookup("ENABLE_HTTPS").as_deref(), true).then(|| TlsConfig {
            cert_path: lookup("TLS_CERT_PATH").unwrap_or_else(|| "cert.pem".to_string()),
            key_path: lookup("TLS_KEY_PATH").unwrap_or_else(|| "key.pem".to_string()),
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            port: parse_or("PORT", lookup("PORT").as_deref(), Self::DEFAULT_PORT),
            tls,
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            per_second: parse_or("RATE_LIMIT_PER_SECOND", lookup("RATE_LIMIT_PER_SECOND").as_deref(), 100),
            burst_size: parse_or("RATE_LIMIT_BURST_SIZE", lookup("RATE_LIMIT_BURST_SIZE").as_deref(), 200),
        }
    }
}

/// 값이 없거나 해석되지 않으면 기본값을 씁니다. 해석 실패는 경고로 남깁니다.
pub fn parse_or<T>(key: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => default,
        Some(value) => value.parse().unwrap_or_else(|e| {
            log::warn!("{} 파싱 실패: {}. 기본값 사용", key, e);
            default
        }),
    }
}

/// `false`/`0`/`no`/`off`만 꺼짐으로 봅니다.
pub fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|value| value.trim().to_lowercase()) {
        None => default,
        Some(value) if value.is_empty() => default,
        Some(value) => !matches!(value.as_str(), "false" | "0" | "no" | "off"),
    }
}
