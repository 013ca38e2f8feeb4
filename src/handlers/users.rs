//! # 사용자 HTTP 핸들러
//!
//! | 메서드 | 경로 | 인증 | 본문 |
//! |--------|------|------|------|
//! | `POST` | `/api/users/login` | 없음 | 로그인 |
//! | `POST` | `/api/users` | 없음 | 가입 |
//! | `GET` | `/api/user` | 필수 | - |
//! | `PUT` | `/api/user` | 필수 | 프로필 수정 |
//!
//! 성공 응답은 모두 `{"user": {...}}` 입니다.

use actix_web::{get, post, put, web, Error, HttpResponse};
use serde_json::json;

use crate::domain::dto::users::request::{LoginRequest, RegisterRequest, UpdateUserRequest};
use crate::domain::CurrentUser;
use crate::services::AppServices;
use crate::validation::Validated;

#[post("/users/login")]
pub async fn login(
    services: web::Data<AppServices>,
    payload: Validated<LoginRequest>,
) -> Result<HttpResponse, Error> {
    let user = services.users.login(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}

#[post("/users")]
pub async fn register(
    services: web::Data<AppServices>,
    payload: Validated<RegisterRequest>,
) -> Result<HttpResponse, Error> {
    let user = services.users.register(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}

#[get("/user")]
pub async fn current_user(
    services: web::Data<AppServices>,
    caller: CurrentUser,
) -> Result<HttpResponse, Error> {
    let user = services.users.current(&caller).await?;
    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}

#[put("/user")]
pub async fn update_user(
    services: web::Data<AppServices>,
    caller: CurrentUser,
    payload: Validated<UpdateUserRequest>,
) -> Result<HttpResponse, Error> {
    let user = services.users.update(&caller, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}
