//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 로컬 저장소는 없으며, 모든 데이터는 원격 Supabase REST API에 위임됩니다.
//! 리포지토리는 trait 뒤에 숨겨져 서비스에 주입되므로 테스트에서 대역으로 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::usuarios::{SupabaseUsuarioRepository, UsuarioStore};
//!
//! let repo: Arc<dyn UsuarioStore> = Arc::new(SupabaseUsuarioRepository::new(&config)?);
//! let reply = repo.select_all().await?;
//! ```

pub mod usuarios;
