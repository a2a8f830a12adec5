//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON을 구조화된 Rust 타입으로 변환하고,
//! `validator` 크레이트로 형식 규칙을 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 필수 필드 (`web::JsonConfig` 에러 핸들러)
//! 2. **형식 검증**: 이메일 형식, 빈 값 여부 (`Validate`)
//!
//! 검증 실패는 `AppError::ValidationError`로 변환되며 원격 호출은 일어나지 않습니다.

pub mod create_usuario;

pub use create_usuario::{CreateUsuarioRequest, DEFAULT_ROL};
