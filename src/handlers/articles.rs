//! # 게시글 HTTP 핸들러
//!
//! `/articles/feed`는 `/articles/{slug}`보다 먼저 등록되어야 합니다.
//! 목록 응답은 `{"articles": [...], "articlesCount": n}`, 단건은 `{"article": {...}}`,
//! 삭제는 빈 객체입니다.

use actix_web::{delete, get, post, put, web, Error, HttpResponse};
use serde_json::json;

use crate::domain::dto::articles::query::{ArticleFilter, Pagination};
use crate::domain::dto::articles::request::{NewArticleRequest, UpdateArticleRequest};
use crate::domain::{CurrentUser, OptionalUser};
use crate::services::AppServices;
use crate::validation::Validated;

#[get("/articles")]
pub async fn list_articles(
    services: web::Data<AppServices>,
    viewer: OptionalUser,
    filter: ArticleFilter,
    page: Pagination,
) -> Result<HttpResponse, Error> {
    let list = services.articles.list(viewer.user(), filter, page).await?;
    Ok(HttpResponse::Ok().json(list))
}

#[get("/articles/feed")]
pub async fn feed(
    services: web::Data<AppServices>,
    caller: CurrentUser,
    page: Pagination,
) -> Result<HttpResponse, Error> {
    let list = services.articles.feed(&caller, page).await?;
    Ok(HttpResponse::Ok().json(list))
}

#[get("/articles/{slug}")]
pub async fn get_article(
    services: web::Data<AppServices>,
    viewer: OptionalUser,
    slug: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let article = services.articles.get(viewer.user(), &slug).await?;
    Ok(HttpResponse::Ok().json(json!({ "article": article })))
}

#[post("/articles")]
pub async fn create_article(
    services: web::Data<AppServices>,
    caller: CurrentUser,
    payload: Validated<NewArticleRequest>,
) -> Result<HttpResponse, Error> {
    let article = services.articles.create(&caller, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "article": article })))
}

#[put("/articles/{slug}")]
pub async fn update_article(
    services: web::Data<AppServices>,
    caller: CurrentUser,
    slug: web::Path<String>,
    payload: Validated<UpdateArticleRequest>,
) -> Result<HttpResponse, Error> {
    let article = services.articles.update(&caller, &slug, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "article": article })))
}

#[delete("/articles/{slug}")]
pub async fn delete_article(
    services: web::Data<AppServices>,
    caller: CurrentUser,
    slug: web::Path<String>,
) -> Result<HttpResponse, Error> {
    services.articles.delete(&caller, &slug).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

#[post("/articles/{slug}/favorite")]
pub async fn favorite(
    services: web::Data<AppServices>,
    caller: CurrentUser,
    slug: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let article = services.articles.favorite(&caller, &slug).await?;
    Ok(HttpResponse::Ok().json(json!({ "article": article })))
}

#[delete("/articles/{slug}/favorite")]
pub async fn unfavorite(
    services: web::Data<AppServices>,
    caller: CurrentUser,
    slug: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let article = services.articles.unfavorite(&caller, &slug).await?;
    Ok(HttpResponse::Ok().json(json!({ "article": article })))
}
