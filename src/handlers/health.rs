use actix_web::{get, HttpResponse};

/// 헬스체크. 본문은 JSON `true` 하나입니다.
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(true)
}
