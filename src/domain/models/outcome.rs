//! # Remote Response Classification
//!
//! 원격 저장소의 HTTP 상태 코드와 본문을 닫힌 결과 집합으로 분류합니다.
//! 상태 코드 분기는 모두 [`RemoteOutcome::classify`] 한 곳에서만 이루어집니다.
//!
//! | 작업 | 성공 코드 | 409 처리 | 그 외 |
//! |------|-----------|----------|-------|
//! | `Create` | 200, 201 | `Conflict` | `RemoteFailure` |
//! | `List` | 200 | `RemoteFailure` | `RemoteFailure` |

use serde_json::Value;

use crate::core::errors::{AppError, AppResult};

/// 중복 이메일로 생성이 거부되었을 때 돌려주는 고정 메시지
pub const USUARIO_YA_EXISTE: &str = "Usuario ya existe";

/// 원격 저장소에 보낸 요청의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOperation {
    Create,
    List,
}

impl RemoteOperation {
    fn is_success(self, status: u16) -> bool {
        match self {
            RemoteOperation::Create => matches!(status, 200 | 201),
            RemoteOperation::List => status == 200,
        }
    }

    fn is_conflict(self, status: u16) -> bool {
        self == RemoteOperation::Create && status == 409
    }
}

/// 원격 응답 분류 결과
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteOutcome {
    Success(Value),
    Conflict,
    RemoteFailure { code: u16, details: String },
}

impl RemoteOutcome {
    /// 상태 코드와 원문 본문으로 결과를 결정합니다.
    ///
    /// 성공 본문은 JSON으로 해석되며, 빈 본문은 `null`이 됩니다.
    /// 실패 본문은 해석하지 않고 원문 그대로 보존합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - 성공 코드인데 본문이 JSON이 아닌 경우
    pub fn classify(operation: RemoteOperation, status: u16, body: &str) -> AppResult<Self> {
        if operation.is_success(status) {
            let data = if body.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str(body).map_err(|e| {
                    AppError::ExternalServiceError(format!("Supabase 응답 파싱 실패: {}", e))
                })?
            };
            return Ok(RemoteOutcome::Success(data));
        }

        if operation.is_conflict(status) {
            return Ok(RemoteOutcome::Conflict);
        }

        Ok(RemoteOutcome::RemoteFailure {
            code: status,
            details: body.to_string(),
        })
    }

    /// 성공이면 데이터를, 그 외에는 대응하는 `AppError`를 반환합니다.
    pub fn into_result(self) -> AppResult<Value> {
        match self {
            RemoteOutcome::Success(data) => Ok(data),
            RemoteOutcome::Conflict => Err(AppError::ConflictError(USUARIO_YA_EXISTE.to_string())),
            RemoteOutcome::RemoteFailure { code, details } => {
                Err(AppError::RemoteError { code, details })
            }
        }
    }
}
