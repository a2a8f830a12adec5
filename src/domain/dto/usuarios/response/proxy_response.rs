//! 응답 봉투 (`ProxyResponse`)
//!
//! 두 엔드포인트는 모두 `status` 판별자를 가진 동일한 JSON 봉투를 반환합니다.
//!
//! ```json
//! {"status": "success", "data": [...]}
//! {"status": "error", "message": "Usuario ya existe"}
//! {"status": "error", "code": 500, "details": "internal failure"}
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// 클라이언트에게 반환되는 통일된 응답 형태
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyResponse {
    /// 원격 응답 본문을 그대로 감싼 성공 응답
    Success { data: Value },
    /// 사람이 읽을 수 있는 메시지를 가진 에러
    Failure { message: String },
    /// 원격 상태 코드와 원문 본문을 그대로 전달하는 에러
    RemoteFailure { code: u16, details: String },
}

impl ProxyResponse {
    pub fn success(data: Value) -> Self {
        ProxyResponse::Success { data }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ProxyResponse::Failure {
            message: message.into(),
        }
    }

    pub fn remote_failure(code: u16, details: impl Into<String>) -> Self {
        ProxyResponse::RemoteFailure {
            code,
            details: details.into(),
        }
    }
}

impl Serialize for ProxyResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        match self {
            ProxyResponse::Success { data } => {
                map.serialize_entry("status", "success")?;
                map.serialize_entry("data", data)?;
            }
            ProxyResponse::Failure { message } => {
                map.serialize_entry("status", "error")?;
                map.serialize_entry("message", message)?;
            }
            ProxyResponse::RemoteFailure { code, details } => {
                map.serialize_entry("status", "error")?;
                map.serialize_entry("code", code)?;
                map.serialize_entry("details", details)?;
            }
        }
        map.end()
    }
}
