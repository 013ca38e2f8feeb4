//! 요청 단위 호출자 식별 정보
//!
//! 두 추출자는 인증 모드만 다릅니다.
//!
//! - [`CurrentUser`]: 필수 인증. 토큰이 없거나 해석에 실패하면 핸들러는 실행되지 않고 401.
//! - [`OptionalUser`]: 선택 인증. 실패는 익명 요청으로 취급되며 핸들러는 항상 실행됩니다.

use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::middlewares::auth::{authenticate, AuthMode};

/// 인증된 호출자
///
/// 요청 처리 동안에만 존재하며 파이프라인이 저장하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// 사용자 고유 ID
    pub user_id: u64,
    /// 요청에 제시된 토큰 원문 (`Token ` 접두사 제외)
    pub token: String,
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<CurrentUser>);

impl OptionalUser {
    pub fn user(&self) -> Option<&CurrentUser> {
        self.0.as_ref()
    }
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = authenticate(req, AuthMode::Required);

        Box::pin(async move {
            match identity.await? {
                Some(user) => Ok(user),
                None => Err(crate::errors::TokenError::NotFound.into()),
            }
        })
    }
}

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = authenticate(req, AuthMode::Optional);

        Box::pin(async move { Ok(OptionalUser(identity.await?)) })
    }
}
