//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, 해싱, 응답 분류                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - Supabase REST 호출              ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<UsuarioService>`를 주입받아 서비스에 위임하고,
//! 결과를 `ProxyResponse` 봉투로 감싸 반환합니다.

pub mod usuarios;
