use actix_web::{get, web, Error, HttpResponse};
use serde_json::json;

use crate::services::AppServices;

#[get("/tags")]
pub async fn list_tags(services: web::Data<AppServices>) -> Result<HttpResponse, Error> {
    let tags = services.articles.tags().await?;
    Ok(HttpResponse::Ok().json(json!({ "tags": tags })))
}
