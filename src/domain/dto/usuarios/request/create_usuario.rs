//! 사용자 생성 요청 DTO
//!
//! `POST /usuarios/` 요청 본문을 정의합니다.
//! 평문 비밀번호를 담고 있으므로 `Serialize`를 구현하지 않으며 `Debug` 출력에서도 가립니다.

use std::fmt;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::string_utils::is_valid_string;

/// `rol`이 생략되었을 때 사용하는 기본 역할
pub const DEFAULT_ROL: &str = "CLIENTE";

/// 새 사용자 등록 요청
///
/// ```json
/// {
///   "nombre": "Ana",
///   "correo": "ana@example.com",
///   "password": "secreto",
///   "rol": "ADMIN"
/// }
/// ```
#[derive(Clone, Deserialize, Validate)]
pub struct CreateUsuarioRequest {
    /// 사용자 이름 (공백만으로 구성될 수 없음)
    #[validate(custom(function = "validate_not_blank", message = "El nombre es obligatorio"))]
    pub nombre: String,

    /// 이메일 주소. 도메인에 점이 없는 주소(`ana@localhost`)는 거부합니다.
    #[validate(
        email(message = "El correo no es válido"),
        custom(function = "validate_dotted_domain", message = "El correo no es válido")
    )]
    pub correo: String,

    /// 평문 비밀번호. 해싱 전에만 존재합니다.
    #[validate(length(min = 1, message = "La contraseña es obligatoria"))]
    pub password: String,

    /// 사용자 역할
    #[serde(default = "default_rol")]
    pub rol: String,
}

impl fmt::Debug for CreateUsuarioRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUsuarioRequest")
            .field("nombre", &self.nombre)
            .field("correo", &self.correo)
            .field("password", &"[REDACTED]")
            .field("rol", &self.rol)
            .finish()
    }
}

fn default_rol() -> String {
    DEFAULT_ROL.to_string()
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_dotted_domain(value: &str) -> Result<(), ValidationError> {
    let domain = value.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("");
    let labels_ok = domain.split('.').all(|label| !label.is_empty());

    if !domain.contains('.') || !labels_ok {
        return Err(ValidationError::new("email_domain"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> CreateUsuarioRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_rol_defaults_to_cliente() {
        let request = parse(json!({
            "nombre": "Ana",
            "correo": "ana@example.com",
            "password": "secreto"
        }));

        assert_eq!(request.rol, "CLIENTE");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_explicit_rol_is_kept() {
        let request = parse(json!({
            "nombre": "Ana",
            "correo": "ana@example.com",
            "password": "secreto",
            "rol": "ADMIN"
        }));

        assert_eq!(request.rol, "ADMIN");
    }

    #[test]
    fn test_invalid_email_fails_validation() {
        let request = parse(json!({
            "nombre": "Ana",
            "correo": "not-an-email",
            "password": "secreto"
        }));

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("correo"));
    }

    #[test]
    fn test_dotless_domain_fails_validation() {
        for correo in ["ana@localhost", "ana@example.", "ana@.com"] {
            let request = parse(json!({
                "nombre": "Ana",
                "correo": correo,
                "password": "secreto"
            }));

            let errors = request.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("correo"), "{}", correo);
        }
    }

    #[test]
    fn test_dotted_domain_passes_validation() {
        assert!(validate_dotted_domain("ana@example.com").is_ok());
        assert!(validate_dotted_domain("ana@mail.example.co").is_ok());
    }

    #[test]
    fn test_blank_nombre_and_empty_password_fail_validation() {
        let request = parse(json!({
            "nombre": "   ",
            "correo": "ana@example.com",
            "password": ""
        }));

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("nombre"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_missing_password_is_rejected_by_deserializer() {
        let result = serde_json::from_value::<CreateUsuarioRequest>(json!({
            "nombre": "Ana",
            "correo": "ana@example.com"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_debug_output_hides_password() {
        let request = parse(json!({
            "nombre": "Ana",
            "correo": "ana@example.com",
            "password": "super-secreto-123"
        }));

        let debug = format!("{:?}", request);
        assert!(!debug.contains("super-secreto-123"));
        assert!(debug.contains("[REDACTED]"));
    }
}
