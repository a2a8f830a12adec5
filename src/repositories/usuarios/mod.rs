//! 사용자 레코드 원격 저장소
//!
//! [`UsuarioStore`](usuario_repo::UsuarioStore) trait과 reqwest 기반 구현체
//! [`SupabaseUsuarioRepository`](usuario_repo::SupabaseUsuarioRepository)를 제공합니다.

pub mod usuario_repo;

pub use usuario_repo::{RemoteReply, SupabaseUsuarioRepository, UsuarioStore, USUARIOS_TABLE};
