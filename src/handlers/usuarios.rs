//! # Usuario HTTP Handlers
//!
//! 사용자 등록/조회 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/usuarios/` | 새 사용자 등록 |
//! | `GET` | `/usuarios/` | 전체 사용자 조회 |
//!
//! 모든 응답은 `{"status": ...}` 봉투 형태이며, 실패는 `AppError`의
//! `ResponseError` 구현을 통해 같은 형태로 변환됩니다. 원격 저장소가 돌려준 결과는
//! 성공이든 실패든 200으로 응답하고, 입력 검증 실패(422)와 원격 저장소 접속 실패(502)만
//! 다른 상태 코드를 사용합니다.

use actix_web::{get, post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::usuarios::request::CreateUsuarioRequest;
use crate::domain::dto::usuarios::response::ProxyResponse;
use crate::services::usuarios::UsuarioService;

/// 사용자 등록 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "nombre": "Ana",
///   "correo": "ana@example.com",
///   "password": "secreto",
///   "rol": "CLIENTE"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {"status": "success", "data": [{"id": 1, "nombre": "Ana", "correo": "ana@example.com", "rol": "CLIENTE"}]}
/// ```
///
/// ## 중복 이메일 (200 OK)
/// ```json
/// {"status": "error", "message": "Usuario ya existe"}
/// ```
///
/// ## 원격 저장소 에러 (200 OK, 원격 상태 코드는 `code`에)
/// ```json
/// {"status": "error", "code": 500, "details": "..."}
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/usuarios/ \
///   -H "Content-Type: application/json" \
///   -d '{"nombre":"Ana","correo":"ana@example.com","password":"secreto"}'
/// ```
#[post("")]
pub async fn create_usuario(
    service: web::Data<UsuarioService>,
    payload: web::Json<CreateUsuarioRequest>,
) -> Result<HttpResponse, AppError> {
    let data = service.register_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ProxyResponse::success(data)))
}

/// 사용자 목록 조회 핸들러
///
/// 원격 저장소의 모든 레코드를 `select=*`로 조회하여 `data`에 그대로 담습니다.
///
/// ```bash
/// curl http://localhost:8080/usuarios/
/// ```
#[get("")]
pub async fn list_usuarios(
    service: web::Data<UsuarioService>,
) -> Result<HttpResponse, AppError> {
    let data = service.list_users().await?;

    Ok(HttpResponse::Ok().json(ProxyResponse::success(data)))
}

/// 브라우저의 파비콘 요청에 빈 객체로 응답합니다.
#[get("/favicon.ico")]
pub async fn favicon() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({}))
}
