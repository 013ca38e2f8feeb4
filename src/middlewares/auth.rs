//! 토큰 인증 로직의 핵심
//!
//! `Authorization: Token <jwt>` 헤더에서 토큰을 꺼내 [`TokenResolver`]에 넘기고,
//! 결과를 인증 모드에 맞게 해석합니다. 해석기가 돌려준 실패 원인은 이 계층에서
//! 바꾸지 않고 그대로 전달합니다.

use actix_web::http::header;
use actix_web::{web, Error, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::core::AppError;
use crate::domain::CurrentUser;
use crate::errors::TokenError;
use crate::services::{AppServices, TokenResolver};

/// 헤더 스킴 접두사 (공백 포함 6자)
pub const TOKEN_SCHEME: &str = "Token ";

/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (있으면 검증, 실패하면 익명으로 진행)
    Optional,
}

/// 요청 헤더에서 토큰 원문을 추출합니다.
///
/// 헤더가 없으면 `NotFound`, `Token ` 접두사로 시작하지 않거나 토큰이 비어 있으면 `Malformed`.
pub fn bearer_token(req: &HttpRequest) -> Result<String, TokenError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(TokenError::NotFound)?
        .to_str()
        .map_err(|_| TokenError::Malformed)?;

    let token = value
        .strip_prefix(TOKEN_SCHEME)
        .map(str::trim)
        .ok_or(TokenError::Malformed)?;

    if token.is_empty() {
        return Err(TokenError::Malformed);
    }

    Ok(token.to_string())
}

/// 요청의 호출자를 해석합니다.
///
/// - `Required`: 실패하면 토큰 에러(401)로 요청이 끝납니다.
/// - `Optional`: 실패하면 `Ok(None)`.
///
/// 해석기가 등록되어 있지 않은 것은 설정 오류이므로 모드와 무관하게 500입니다.
pub fn authenticate(
    req: &HttpRequest,
    mode: AuthMode,
) -> LocalBoxFuture<'static, Result<Option<CurrentUser>, Error>> {
    let resolver = req
        .app_data::<web::Data<AppServices>>()
        .map(|services| services.tokens.clone());
    let token = bearer_token(req);
    let path = req.path().to_string();

    Box::pin(async move {
        let resolver = resolver
            .ok_or_else(|| AppError::Unhandled("토큰 해석기가 등록되지 않았습니다".to_string()))?;

        match (mode, resolve(resolver.as_ref(), token).await) {
            (_, Ok(user)) => {
                log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                Ok(Some(user))
            }
            (AuthMode::Required, Err(err)) => {
                log::warn!("인증 실패 ({}): {}", path, err);
                Err(err.into())
            }
            (AuthMode::Optional, Err(err)) => {
                log::debug!("선택적 인증 실패, 익명으로 진행 ({}): {}", path, err);
                Ok(None)
            }
        }
    })
}

async fn resolve(
    resolver: &dyn TokenResolver,
    token: Result<String, TokenError>,
) -> Result<CurrentUser, TokenError> {
    let token = token?;
    let user_id = resolver.resolve(&token).await?;

    Ok(CurrentUser { user_id, token })
}
