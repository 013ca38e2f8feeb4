//! # 애플리케이션 설정
//!
//! 시작 시 [`AppConfig::from_env`]로 한 번 만들어지고, 이후에는 값으로 전달됩니다.
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `ENVIRONMENT` | `production` |
//! | `HOST` / `PORT` | `0.0.0.0` / `3000` |
//! | `ENABLE_HTTPS` | `true` |
//! | `TLS_CERT_PATH` / `TLS_KEY_PATH` | `cert.pem` / `key.pem` |
//! | `JWT_SECRET` / `JWT_EXPIRATION_HOURS` | 개발용 키 / `24` |
//! | `BCRYPT_COST` | 실행 환경별 |
//! | `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST_SIZE` | `100` / `200` |

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let environment = Environment::from_name(&lookup("ENVIRONMENT").unwrap_or_default());

        Self {
            environment,
            server: ServerConfig::from_lookup(lookup),
            jwt: JwtConfig::from_lookup(lookup),
            password: PasswordConfig::from_lookup(lookup, environment),
            rate_limit: RateLimitConfig::from_lookup(lookup),
        }
    }
}
