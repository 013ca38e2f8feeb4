//! # 인증 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export BCRYPT_COST="12"   # 없으면 실행 환경에 따라 결정
//! ```

use super::data_config::{parse_or, Environment};

const DEFAULT_JWT_SECRET: &str = "conduit-development-secret";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl JwtConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            DEFAULT_JWT_SECRET.to_string()
        });

        Self {
            secret,
            expiration_hours: parse_or("JWT_EXPIRATION_HOURS", lookup("JWT_EXPIRATION_HOURS").as_deref(), 24),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>, env: Environment) -> Self {
        let explicit = lookup("BCRYPT_COST")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|cost| (4..=31).contains(cost));

        Self {
            bcrypt_cost: explicit.unwrap_or_else(|| Self::bcrypt_cost_for_env(env)),
        }
    }

    pub fn bcrypt_cost_for_env(env: Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_defaults() {
        let jwt = JwtConfig::from_lookup(&|_| None);

        assert_eq!(jwt.secret, DEFAULT_JWT_SECRET);
        assert_eq!(jwt.expiration_hours, 24);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Production), 12);
    }

    #[test]
    fn test_explicit_bcrypt_cost_must_be_in_range() {
        let lookup = |key: &str| (key == "BCRYPT_COST").then(|| "2".to_string());
        assert_eq!(PasswordConfig::from_lookup(&lookup, Environment::Staging).bcrypt_cost, 10);

        let lookup = |key: &str| (key == "BCRYPT_COST").then(|| "6".to_string());
        assert_eq!(PasswordConfig::from_lookup(&lookup, Environment::Production).bcrypt_cost, 6);
    }
}
