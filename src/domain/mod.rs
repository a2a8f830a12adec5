//! # Domain Layer
//!
//! 사용자 프록시의 도메인 타입을 정의합니다.
//!
//! ```text
//! domain/
//! ├── dto/        ← HTTP 요청/응답 형태 (CreateUsuarioRequest, ProxyResponse)
//! ├── entities/   ← 원격 저장소로 전송되는 레코드 (NuevoUsuario)
//! └── models/     ← 원격 응답 분류 결과 (RemoteOutcome)
//! ```

pub mod entities;
pub mod dto;
pub mod models;
