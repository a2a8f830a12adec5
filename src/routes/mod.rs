//! API 라우트 설정 모듈
//!
//! # Routes
//!
//! - `POST /usuarios/` - 사용자 등록
//! - `GET /usuarios/` - 사용자 목록 조회
//! - `GET /favicon.ico` - 빈 객체
//! - `GET /health` - 헬스체크
//!
//! 경로 끝의 `/`는 `NormalizePath::trim` 미들웨어가 제거하므로 `/usuarios`와
//! `/usuarios/`는 같은 핸들러로 연결됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 파싱 실패(필수 필드 누락, 잘못된 JSON)도 검증 에러 봉투로 응답하도록
/// `JsonConfig` 에러 핸들러를 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.service(health_check);
    cfg.service(handlers::usuarios::favicon);

    configure_usuario_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
fn configure_usuario_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/usuarios")
            .service(handlers::usuarios::create_usuario)
            .service(handlers::usuarios::list_usuarios),
    );
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 원격 저장소는 호출하지 않으며, 프로세스가 요청을 받을 수 있는지만 알려줍니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
