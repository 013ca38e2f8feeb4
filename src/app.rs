//! 애플리케이션 조립
//!
//! 서버 바이너리와 통합 테스트가 같은 미들웨어 스택을 쓰도록 `App` 구성을 한곳에 둡니다.
//!
//! 미들웨어는 나중에 감쌀수록 바깥쪽입니다. 안쪽부터:
//!
//! ```text
//! Logger
//!  └─ NormalizePath
//!      └─ JSON 에러 핸들러   ← CORS 거부, 429 를 포함한 평문 에러를 JSON 으로
//!          └─ CORS
//!              └─ Governor   ← 라우팅 서비스 바로 위 (Unpin future 필요)
//!                  └─ /api 라우트
//! ```

use actix_governor::governor::middleware::StateInformationMiddleware;
use actix_governor::{Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware, web, App};

use crate::config::RateLimitConfig;
use crate::middlewares::{configure_cors, json_error_handlers};
use crate::routes::configure_all_routes;
use crate::services::AppServices;

/// 피어 IP 기준 Rate Limiting 설정 (`x-ratelimit-*` 헤더 포함)
pub type RateLimiter = GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// Rate Limiting 설정을 만듭니다. 초당 요청 수나 버스트 크기가 0이면 `None`.
pub fn rate_limiter(config: &RateLimitConfig) -> Option<RateLimiter> {
    if config.per_second == 0 {
        return None;
    }

    GovernorConfigBuilder::default()
        .requests_per_second(config.per_second)
        .burst_size(config.burst_size)
        .use_headers()
        .finish()
}

/// 서비스와 Rate Limiter 를 받아 전체 미들웨어 스택과 라우트를 갖춘 `App`을 만듭니다.
///
/// 워커마다 호출되므로 Rate Limiter 상태는 복제된 설정을 통해 모든 워커가 공유합니다.
pub fn create_app(
    services: web::Data<AppServices>,
    rate_limiter: RateLimiter,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    App::new()
        .app_data(services)
        .wrap(Governor::new(&rate_limiter))
        .wrap(configure_cors())
        .wrap(json_error_handlers())
        .wrap(middleware::NormalizePath::trim())
        .wrap(middleware::Logger::default())
        .configure(configure_all_routes)
}
