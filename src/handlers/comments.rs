//! 댓글 핸들러

use actix_web::{delete, get, post, web, Error, HttpResponse};
use serde_json::json;

use crate::domain::dto::comments::NewCommentRequest;
use crate::domain::{CurrentUser, OptionalUser};
use crate::services::AppServices;
use crate::validation::Validated;

#[post("/articles/{slug}/comments")]
pub async fn add_comment(
    services: web::Data<AppServices>,
    caller: CurrentUser,
    slug: web::Path<String>,
    payload: Validated<NewCommentRequest>,
) -> Result<HttpResponse, Error> {
    let comment = services.comments.add(&caller, &slug, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "comment": comment })))
}

#[delete("/articles/{slug}/comments/{id}")]
pub async fn delete_comment(
    services: web::Data<AppServices>,
    caller: CurrentUser,
    path: web::Path<(String, u64)>,
) -> Result<HttpResponse, Error> {
    let (slug, id) = path.into_inner();
    services.comments.delete(&caller, &slug, id).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

#[get("/articles/{slug}/comments")]
pub async fn list_comments(
    services: web::Data<AppServices>,
    viewer: OptionalUser,
    slug: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let comments = services.comments.list(viewer.user(), &slug).await?;
    Ok(HttpResponse::Ok().json(json!({ "comments": comments })))
}
