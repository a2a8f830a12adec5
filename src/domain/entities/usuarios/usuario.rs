//! 원격 저장소로 전송되는 사용자 레코드
//!
//! Supabase `usuarios` 테이블의 한 행과 같은 형태입니다.
//! 로컬에는 저장되지 않으며, 전송이 성공하면 레코드의 생명주기는 원격 서비스가 소유합니다.

use serde::{Deserialize, Serialize};

/// 새로 등록할 사용자 레코드
///
/// 평문 비밀번호 대신 bcrypt 해시만을 담습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NuevoUsuario {
    pub nombre: String,
    pub correo: String,
    /// bcrypt 해시 (솔트와 cost가 포함된 `$2b$...` 형식)
    pub password_hash: String,
    pub rol: String,
}

impl NuevoUsuario {
    pub fn new(nombre: String, correo: String, password_hash: String, rol: String) -> Self {
        Self {
            nombre,
            correo,
            password_hash,
            rol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_remote_column_names() {
        let usuario = NuevoUsuario::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "CLIENTE".to_string(),
        );

        assert_eq!(
            serde_json::to_value(&usuario).unwrap(),
            json!({
                "nombre": "Ana",
                "correo": "ana@example.com",
                "password_hash": "$2b$04$hash",
                "rol": "CLIENTE"
            })
        );
    }
}
