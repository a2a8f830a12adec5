//! # 사용자 등록/조회 서비스 구현
//!
//! 원격 Supabase 저장소를 대상으로 한 사용자 등록과 목록 조회의 비즈니스 로직입니다.
//!
//! ```text
//! register_user:  validate → bcrypt hash → insert (1회) → classify → envelope
//! list_users:                             select (1회) → classify → envelope
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 호출마다 새로운 솔트를 생성하며 솔트와 cost는 해시 문자열에 포함됩니다
//! - **평문 비밀번호 비노출**: 원격 레코드, 응답, 로그 어디에도 평문을 남기지 않습니다
//! - **검증 우선**: 입력 검증이 실패하면 해싱도 원격 호출도 하지 않습니다
//!
//! ## 동시성
//!
//! 서비스는 불변 상태만 가지며 요청 간 공유되는 가변 상태가 없습니다.
//! 같은 이메일로 동시에 들어온 두 요청은 모두 로컬 검증을 통과할 수 있으며,
//! 유일성은 원격 저장소의 409 응답이 최종적으로 판정합니다.

use std::sync::Arc;
use std::time::Instant;

use actix_web::web;
use bcrypt::hash;
use log::{info, warn};
use serde_json::Value;
use validator::Validate;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::usuarios::request::CreateUsuarioRequest;
use crate::domain::entities::usuarios::NuevoUsuario;
use crate::domain::models::{RemoteOperation, RemoteOutcome};
use crate::repositories::usuarios::{RemoteReply, UsuarioStore};

/// 사용자 등록/조회 서비스
///
/// 원격 저장소와 bcrypt cost를 생성 시점에 주입받습니다.
/// `web::Data`로 감싸 모든 워커가 하나의 인스턴스를 공유합니다.
///
/// ```rust,ignore
/// let repo = SupabaseUsuarioRepository::new(&SupabaseConfig::from_env()?)?;
/// let service = UsuarioService::new(Arc::new(repo), PasswordConfig::bcrypt_cost());
///
/// let data = service.list_users().await?;
/// ```
pub struct UsuarioService {
    store: Arc<dyn UsuarioStore>,
    bcrypt_cost: u32,
}

impl UsuarioService {
    pub fn new(store: Arc<dyn UsuarioStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// 새 사용자 등록
    ///
    /// # 반환값
    ///
    /// * `Ok(Value)` - 원격 저장소가 200/201로 돌려준 본문
    /// * `Err(AppError::ValidationError)` - 입력 검증 실패 (원격 호출 없음)
    /// * `Err(AppError::ConflictError)` - 원격 409, 메시지는 `"Usuario ya existe"`
    /// * `Err(AppError::RemoteError)` - 그 밖의 원격 상태 코드
    /// * `Err(AppError::TransportError)` - 원격 서비스에 도달하지 못함
    /// * `Err(AppError::InternalError)` - 해싱 실패
    pub async fn register_user(&self, request: CreateUsuarioRequest) -> AppResult<Value> {
        let start_time = Instant::now();

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let CreateUsuarioRequest {
            nombre,
            correo,
            password,
            rol,
        } = request;

        let hash_start = Instant::now();
        let password_hash = self.hash_password(password).await?;
        info!("Password hashing took: {:?}", hash_start.elapsed());

        let usuario = NuevoUsuario::new(nombre, correo, password_hash, rol);
        let reply = self.store.insert(&usuario).await?;

        let result = Self::resolve(RemoteOperation::Create, reply);
        match &result {
            Ok(_) => info!("사용자 등록 완료: {}", usuario.correo),
            Err(AppError::ConflictError(_)) => warn!("이미 존재하는 사용자: {}", usuario.correo),
            Err(e) => warn!("사용자 등록 실패: {}", e),
        }

        info!("Total user registration took: {:?}", start_time.elapsed());
        result
    }

    /// 전체 사용자 조회
    ///
    /// 페이지네이션이나 필터 없이 원격 저장소의 기본 페이지 크기를 따릅니다.
    /// 409를 포함한 200 이외의 모든 상태는 `AppError::RemoteError`가 됩니다.
    pub async fn list_users(&self) -> AppResult<Value> {
        let reply = self.store.select_all().await?;

        let result = Self::resolve(RemoteOperation::List, reply);
        if let Err(e) = &result {
            warn!("사용자 목록 조회 실패: {}", e);
        }
        result
    }

    fn resolve(operation: RemoteOperation, reply: RemoteReply) -> AppResult<Value> {
        RemoteOutcome::classify(operation, reply.status, &reply.body)?.into_result()
    }

    /// bcrypt 해싱은 CPU를 오래 점유하므로 블로킹 스레드 풀에서 실행합니다.
    async fn hash_password(&self, password: String) -> AppResult<String> {
        let cost = self.bcrypt_cost;
        web::block(move || hash(password, cost))
            .await
            .context("해싱 작업 실행 실패")?
            .context("비밀번호 해싱 실패")
    }
}
