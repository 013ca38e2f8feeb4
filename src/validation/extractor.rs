//! 검증된 요청 본문 추출자

use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use super::schema::{parse_payload, Schema};

/// 스키마 검증을 통과한 요청 본문
///
/// 본문이 JSON 이 아니거나 스키마 검증에 실패하면 핸들러는 실행되지 않고
/// [`crate::errors::PayloadError`]가 그대로 422 응답이 됩니다.
///
/// ```rust,ignore
/// #[post("/users/login")]
/// async fn login(payload: Validated<Login>) -> Result<HttpResponse, Error> { ... }
/// ```
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for Validated<T>
where
    T: Schema + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        // Content-Type 과 무관하게 원본 바이트를 받은 뒤 직접 해석
        let body = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = body.await?;
            let accepted = parse_payload::<T>(&bytes)?;
            Ok(Validated(accepted))
        })
    }
}
