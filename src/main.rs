//! 은행 보안 서비스 메인 애플리케이션
//!
//! 환경 프로필을 로드하고 [`AppState`]에 서비스를 연결한 뒤,
//! 보안 필터 체인 뒤에서 Actix-web HTTP 서버를 구동합니다.

use std::io;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use bank_security_backend::config::{Environment, RateLimitConfig, ServerConfig};
use bank_security_backend::routes::configure_all_routes;
use bank_security_backend::state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 은행 보안 서비스 시작중... ({:?})", Environment::current());

    let state = AppState::from_env();
    info!(
        "🔐 보안 필터 체인: [{}]",
        state.security_filter_chain().filter_names().join(", ")
    );

    start_http_server(state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 요청은 바깥쪽부터 경로 정규화, 접근 로그, CORS, 보안 필터 체인,
/// Rate Limiting 순서로 통과한 뒤 핸들러에 도달합니다.
///
/// # Errors
///
/// * `io::Error` - 잘못된 Rate Limiting 설정, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: AppState) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Rate Limiting 설정이 올바르지 않습니다")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            // Rate Limiting 미들웨어 (라우트에 가장 가깝게)
            .wrap(Governor::new(&governor_conf))
            .wrap(state.security_filter_chain())
            .wrap(state.security_config.configure_cors())
            .wrap(middleware::Logger::default())
            // 경로 정규화가 가장 먼저 실행되어 보안 필터가 정규화된 경로를 봄
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 "info,actix_web=debug" 레벨을 사용합니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
