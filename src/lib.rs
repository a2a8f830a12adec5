//! 사용자 등록/조회 프록시 서비스
//!
//! 사용자 생성과 목록 조회 두 개의 엔드포인트를 제공하고, 실제 데이터는
//! Supabase REST API(`/rest/v1/usuarios`)에 위임하는 actix-web 서비스입니다.
//!
//! # Features
//!
//! - **입력 검증**: `validator` 기반 이메일/필수값 검증, 실패 시 원격 호출 없음
//! - **bcrypt 해싱**: 호출마다 새 솔트, 평문 비밀번호는 원격으로 전송되지 않음
//! - **응답 분류**: 원격 상태 코드를 닫힌 결과 집합(`RemoteOutcome`)으로 분류
//! - **통일된 응답 봉투**: `{"status": "success" | "error", ...}`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /usuarios/, /favicon.ico, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 봉투 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 해싱, 응답 분류
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UsuarioStore (reqwest)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Supabase REST   │ ← 원격 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use usuarios_proxy::config::{PasswordConfig, SupabaseConfig};
//! use usuarios_proxy::repositories::usuarios::SupabaseUsuarioRepository;
//! use usuarios_proxy::services::usuarios::UsuarioService;
//!
//! let config = SupabaseConfig::from_env()?;
//! let repo = SupabaseUsuarioRepository::new(&config)?;
//! let service = UsuarioService::new(Arc::new(repo), PasswordConfig::bcrypt_cost());
//!
//! let usuarios = service.list_users().await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
