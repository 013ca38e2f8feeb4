//! JWT 토큰 발급 및 해석
//!
//! HMAC-SHA256(HS256)으로 서명합니다. 해석은 서명과 만료를 검증한 뒤, 토큰의 주체가
//! 아직 저장소에 있는지까지 확인합니다.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::core::{AppResult, ErrorContext};
use crate::domain::models::token::TokenClaims;
use crate::errors::TokenError;
use crate::repositories::Store;
use crate::services::TokenResolver;

pub struct JwtTokenService {
    store: Store,
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(store: Store, config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            store,
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 사용자를 위한 액세스 토큰 생성
    pub fn issue(&self, user_id: u64) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.config.expiration_hours);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).context("JWT 토큰 생성 실패")
    }

    /// 서명과 만료만 검증하고 주체 ID 를 돌려줍니다.
    pub fn verify(&self, token: &str) -> Result<u64, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })?;

        claims
            .sub
            .parse()
            .map_err(|_| TokenError::Invalid(format!("subject is not a user id: {}", claims.sub)))
    }
}

#[async_trait]
impl TokenResolver for JwtTokenService {
    async fn resolve(&self, token: &str) -> Result<u64, TokenError> {
        let user_id = self.verify(token)?;

        if self.store.read().await.users.contains_key(&user_id) {
            Ok(user_id)
        } else {
            Err(TokenError::UnknownSubject)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::User;

    fn service(expiration_hours: i64) -> JwtTokenService {
        JwtTokenService::new(
            Store::new(),
            JwtConfig {
                secret: "test-secret".to_string(),
                expiration_hours,
            },
        )
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service(1);
        let token = tokens.issue(42).unwrap();

        assert_eq!(tokens.verify(&token), Ok(42));
    }

    #[test]
    fn test_expired_token() {
        let tokens = service(-2);
        let token = tokens.issue(42).unwrap();

        assert_eq!(tokens.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_foreign_signature_is_invalid() {
        let token = service(1).issue(42).unwrap();
        let other = JwtTokenService::new(
            Store::new(),
            JwtConfig {
                secret: "another-secret".to_string(),
                expiration_hours: 1,
            },
        );

        assert!(matches!(other.verify(&token), Err(TokenError::Invalid(_))));
        assert!(matches!(other.verify("not-a-jwt"), Err(TokenError::Invalid(_))));
    }

    #[actix_web::test]
    async fn test_resolve_requires_existing_subject() {
        let tokens = service(1);
        let token = tokens.issue(1).unwrap();
        assert_eq!(tokens.resolve(&token).await, Err(TokenError::UnknownSubject));

        {
            let mut state = tokens.store.write().await;
            let id = state.next_user_id();
            state.users.insert(
                id,
                User::new(id, "jake".to_string(), "jake@jake.jake".to_string(), "hash".to_string()),
            );
        }
        assert_eq!(tokens.resolve(&token).await, Ok(1));
    }
}
