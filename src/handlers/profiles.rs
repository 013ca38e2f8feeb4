//! 프로필 핸들러. 성공 응답은 `{"profile": {...}}` 입니다.

use actix_web::{delete, get, post, web, Error, HttpResponse};
use serde_json::json;

use crate::domain::{CurrentUser, OptionalUser};
use crate::services::AppServices;

#[get("/profiles/{username}")]
pub async fn get_profile(
    services: web::Data<AppServices>,
    viewer: OptionalUser,
    username: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let profile = services.users.profile(viewer.user(), &username).await?;
    Ok(HttpResponse::Ok().json(json!({ "profile": profile })))
}

#[post("/profiles/{username}/follow")]
pub async fn follow(
    services: web::Data<AppServices>,
    caller: CurrentUser,
    username: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let profile = services.users.follow(&caller, &username).await?;
    Ok(HttpResponse::Ok().json(json!({ "profile": profile })))
}

#[delete("/profiles/{username}/follow")]
pub async fn unfollow(
    services: web::Data<AppServices>,
    caller: CurrentUser,
    username: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let profile = services.users.unfollow(&caller, &username).await?;
    Ok(HttpResponse::Ok().json(json!({ "profile": profile })))
}
