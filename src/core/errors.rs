//! # Application Error Handling System
//!
//! 사용자 프록시 서비스의 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러를 동일한 `{"status": "error", ...}` 응답 봉투로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 422 Unprocessable Entity | `{status, message}` |
//! | `ConflictError` | 200 OK | `{status, message}` |
//! | `RemoteError` | 200 OK | `{status, code, details}` |
//! | `TransportError` | 502 Bad Gateway | `{status, message}` |
//! | `ExternalServiceError` | 502 Bad Gateway | `{status, message}` |
//! | `ConfigError` | 500 Internal Server Error | `{status, message}` |
//! | `InternalError` | 500 Internal Server Error | `{status, message}` |
//!
//! 원격 저장소가 응답한 결과(중복, 그 밖의 실패)는 본문의 `status` 판별자로 구분하고
//! HTTP 상태는 200으로 둡니다. 원격 상태 코드는 `code` 필드에만 담깁니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let response = client.get(url).send().await
//!     .map_err(|e| AppError::TransportError(e.to_string()))?;
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::dto::usuarios::response::ProxyResponse;

/// 애플리케이션 전역 에러 타입
///
/// 요청 하나의 실패는 그 요청의 응답으로만 전달되며, 서버 프로세스에는 영향을 주지 않습니다.
/// 어떤 에러도 로컬 재시도를 유발하지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 잘못된 이메일 형식이나 필수 필드 누락. 해싱이나 네트워크 호출 이전에 발생합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 원격 저장소가 중복 리소스(409)를 알린 경우
    ///
    /// 메시지는 클라이언트에 그대로 노출되는 고정 문구입니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 그 밖의 실패 상태 코드를 받은 경우
    ///
    /// 원격 응답의 상태 코드와 본문을 가공 없이 전달합니다.
    #[error("Remote error {code}: {details}")]
    RemoteError { code: u16, details: String },

    /// 원격 서비스에 도달하지 못한 경우 (DNS, 연결 거부, 타임아웃)
    #[error("Transport error: {0}")]
    TransportError(String),

    /// 원격 서비스가 성공 코드와 함께 해석할 수 없는 본문을 돌려준 경우
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 설정 오류 (필수 환경 변수 누락, 헤더 값 오류)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (해싱 실패 등)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 돌려줄 응답 봉투
    pub fn envelope(&self) -> ProxyResponse {
        match self {
            AppError::ValidationError(msg) | AppError::ConflictError(msg) => {
                ProxyResponse::failure(msg.clone())
            }
            AppError::RemoteError { code, details } => {
                ProxyResponse::remote_failure(*code, details.clone())
            }
            other => ProxyResponse::failure(other.to_string()),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ConflictError(_) | AppError::RemoteError { .. } => StatusCode::OK,
            AppError::TransportError(_) | AppError::ExternalServiceError(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.envelope())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
