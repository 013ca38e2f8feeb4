//! Conduit API 서버
//!
//! 설정을 한 번 읽고, 서비스를 구성한 뒤 Actix-web HTTP(S) 서버를 구동합니다.

use std::fs::File;
use std::io::{self, BufReader};
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use conduit_api::app::{create_app, rate_limiter};
use conduit_api::config::{AppConfig, TlsConfig};
use conduit_api::services::AppServices;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Conduit API 시작중...");

    // 설정은 시작 시 한 번만 읽음
    let config = AppConfig::from_env();
    info!("실행 환경: {:?}", config.environment);

    let services = web::Data::new(AppServices::in_memory(config.jwt.clone(), config.password));

    start_http_server(config, services).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// `ENABLE_HTTPS`가 켜져 있으면 rustls 로 TLS 를 적용하고, 꺼져 있으면 평문 HTTP 로 바인딩합니다.
async fn start_http_server(config: AppConfig, services: web::Data<AppServices>) -> io::Result<()> {
    let limiter = rate_limiter(&config.rate_limit)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second, config.rate_limit.burst_size
    );

    let server = HttpServer::new(move || create_app(services.clone(), limiter.clone()));

    let address = config.server.bind_address();
    let server = match &config.server.tls {
        Some(tls) => {
            info!("🔒 서버가 https://{}:{} 에서 실행중입니다", address.0, address.1);
            server.bind_rustls_0_23(address, load_rustls_config(tls)?)?
        }
        None => {
            info!("🌐 서버가 http://{}:{} 에서 실행중입니다", address.0, address.1);
            server.bind(address)?
        }
    };

    server.run().await
}

/// PEM 인증서와 개인 키로 rustls 서버 설정을 만듭니다
fn load_rustls_config(tls: &TlsConfig) -> io::Result<rustls::ServerConfig> {
    let mut cert_reader = BufReader::new(File::open(&tls.cert_path).map_err(|e| {
        error!("인증서 파일 열기 실패 ({}): {}", tls.cert_path, e);
        e
    })?);
    let mut key_reader = BufReader::new(File::open(&tls.key_path).map_err(|e| {
        error!("개인 키 파일 열기 실패 ({}): {}", tls.key_path, e);
        e
    })?);

    let certs = rustls_pemfile::certs(&mut cert_reader).collect::<Result<Vec<_>, _>>()?;
    let key = rustls_pemfile::private_key(&mut key_reader)?.ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("개인 키가 없습니다: {}", tls.key_path))
    })?;

    rustls::ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr 로 직접 남김
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    if let Err(e) = loaded {
        eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
