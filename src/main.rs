//! 사용자 프록시 서비스 메인 애플리케이션
//!
//! 설정을 로드하고 Supabase 리포지토리와 서비스를 구성한 뒤
//! Actix-web 기반의 HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use usuarios_proxy::config::{PasswordConfig, RateLimitConfig, ServerConfig, SupabaseConfig};
use usuarios_proxy::core::errors::AppResult;
use usuarios_proxy::repositories::usuarios::SupabaseUsuarioRepository;
use usuarios_proxy::routes::configure_all_routes;
use usuarios_proxy::services::usuarios::UsuarioService;
use usuarios_proxy::utils::string_utils::mask_secret;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 프록시 서비스 시작중...");

    let service = match build_usuario_service() {
        Ok(service) => web::Data::new(service),
        Err(e) => {
            error!("서비스 초기화 실패: {}", e);
            return Err(io::Error::other(e.to_string()));
        }
    };

    info!("✅ 서비스 초기화 완료");

    start_http_server(service).await
}

/// Supabase 설정을 읽어 리포지토리와 서비스를 구성합니다
///
/// # Errors
///
/// * `AppError::ConfigError` - `SUPABASE_URL` 누락 또는 헤더 값 오류
fn build_usuario_service() -> AppResult<UsuarioService> {
    let config = SupabaseConfig::from_env()?;

    info!("📡 Supabase: {}", config.base_url());
    info!("🔑 Supabase key: {}", mask_secret(config.api_key()));

    let repository = SupabaseUsuarioRepository::new(&config)?;
    let bcrypt_cost = PasswordConfig::bcrypt_cost();
    info!("🔒 bcrypt cost: {}", bcrypt_cost);

    Ok(UsuarioService::new(Arc::new(repository), bcrypt_cost))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(service: web::Data<UsuarioService>) -> io::Result<()> {
    let bind_address = (ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", bind_address.0, bind_address.1);
    info!("📍 Health check: http://{}:{}/health", bind_address.0, bind_address.1);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 유효하지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 프로필 파일이 없으면 기본 .env 파일을 시도합니다. 어느 파일도 없으면
/// 프로세스 환경 변수만 사용합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let profile_file = match profile.as_str() {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    };

    if let Some(file) = profile_file {
        if dotenv::from_filename(file).is_ok() {
            return;
        }
    }

    if dotenv().is_err() {
        // 로거 초기화 전이므로 표준 에러로 남깁니다
        eprintln!("환경 파일을 찾지 못했습니다 (profile: {}). 프로세스 환경 변수만 사용합니다", profile);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 개발 환경의 로컬호스트 프론트엔드에서의 호출을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
