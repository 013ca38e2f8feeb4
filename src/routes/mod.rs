//! # 라우트 구성
//!
//! 모든 엔드포인트는 `/api` 아래에 있으며, 인증 요구 수준은 스코프 미들웨어가 아니라
//! 각 핸들러의 추출자로 정해집니다. 같은 경로라도 메서드마다 인증 모드가 다르기 때문입니다.
//!
//! 어떤 라우트에도 맞지 않는 요청은 기본 서비스가 처리합니다.
//!
//! - `OPTIONS`: 빈 200
//! - 그 밖: 404 `route_not_found`

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// ```rust,ignore
/// let app = App::new()
///     .app_data(web::Data::new(services))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::health::health_check)
            .configure(configure_user_routes)
            .configure(configure_profile_routes)
            .configure(configure_article_routes)
            .configure(configure_comment_routes)
            .service(handlers::tags::list_tags),
    );

    cfg.default_service(web::to(fallback));
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::login)
        .service(handlers::users::register)
        .service(handlers::users::current_user)
        .service(handlers::users::update_user);
}

fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::profiles::get_profile)
        .service(handlers::profiles::follow)
        .service(handlers::profiles::unfollow);
}

fn configure_article_routes(cfg: &mut web::ServiceConfig) {
    // feed 가 {slug} 보다 먼저
    cfg.service(handlers::articles::feed)
        .service(handlers::articles::list_articles)
        .service(handlers::articles::create_article)
        .service(handlers::articles::get_article)
        .service(handlers::articles::update_article)
        .service(handlers::articles::delete_article)
        .service(handlers::articles::favorite)
        .service(handlers::articles::unfavorite);
}

fn configure_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::comments::add_comment)
        .service(handlers::comments::delete_comment)
        .service(handlers::comments::list_comments);
}

async fn fallback(req: HttpRequest) -> Result<HttpResponse, AppError> {
    if *req.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }

    Err(AppError::RouteNotFound(format!("{} {}", req.method(), req.path())))
}
