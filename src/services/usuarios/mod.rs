//! 사용자 등록/조회 서비스 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::usuarios::UsuarioService;
//!
//! let service = UsuarioService::new(store, PasswordConfig::bcrypt_cost());
//! let data = service.register_user(request).await?;
//! ```

pub mod usuario_service;

pub use usuario_service::UsuarioService;
