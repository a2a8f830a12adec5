//! # Usuario Repository
//!
//! Supabase `usuarios` 테이블에 대한 데이터 액세스 계층입니다.
//!
//! 리포지토리는 상태 코드를 해석하지 않습니다. 원격 응답의 상태 코드와 본문 원문을
//! [`RemoteReply`]로 그대로 돌려주고, 분류는 서비스 계층이 담당합니다.
//! 연결 자체가 실패한 경우에만 `AppError::TransportError`를 반환합니다.
//!
//! ```text
//! POST <base>/rest/v1/usuarios            ← insert
//! GET  <base>/rest/v1/usuarios?select=*   ← select_all
//! ```

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, ClientBuilder};

use crate::config::SupabaseConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::usuarios::NuevoUsuario;

/// 사용자 레코드가 저장되는 원격 테이블 이름
pub const USUARIOS_TABLE: &str = "usuarios";

/// 원격 저장소의 응답 원문
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteReply {
    pub status: u16,
    pub body: String,
}

impl RemoteReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// 사용자 레코드를 보관하는 원격 저장소
///
/// 호출 한 번에 정확히 한 번의 원격 요청을 보내며, 재시도하지 않습니다.
#[async_trait]
pub trait UsuarioStore: Send + Sync {
    /// 새 레코드 생성 요청
    async fn insert(&self, usuario: &NuevoUsuario) -> AppResult<RemoteReply>;

    /// 전체 레코드 조회 요청
    async fn select_all(&self) -> AppResult<RemoteReply>;
}

/// reqwest 기반 Supabase REST 구현체
///
/// 고정 헤더와 타임아웃이 설정된 `reqwest::Client`를 내부에 보관합니다.
/// `Client`는 내부적으로 커넥션 풀을 공유하므로 서버 전체에서 하나만 만들어 사용합니다.
#[derive(Debug, Clone)]
pub struct SupabaseUsuarioRepository {
    client: Client,
    resource_url: String,
}

impl SupabaseUsuarioRepository {
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 헤더 값이 잘못되었거나 HTTP 클라이언트 생성에 실패한 경우
    pub fn new(config: &SupabaseConfig) -> AppResult<Self> {
        Self::with_builder(Client::builder(), config)
    }

    /// 프록시, TLS 등 클라이언트 옵션을 직접 지정할 때 사용합니다.
    /// 고정 헤더와 타임아웃은 `config`의 값으로 덮어씁니다.
    pub fn with_builder(builder: ClientBuilder, config: &SupabaseConfig) -> AppResult<Self> {
        let client = builder
            .default_headers(config.default_headers()?)
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::ConfigError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            resource_url: config.resource_url(USUARIOS_TABLE),
        })
    }

    async fn into_reply(response: reqwest::Response) -> AppResult<RemoteReply> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::TransportError(format!("Supabase 응답 수신 실패: {}", e)))?;

        debug!("Supabase 응답: status={}, {} bytes", status, body.len());
        Ok(RemoteReply { status, body })
    }
}

#[async_trait]
impl UsuarioStore for SupabaseUsuarioRepository {
    async fn insert(&self, usuario: &NuevoUsuario) -> AppResult<RemoteReply> {
        let response = self
            .client
            .post(&self.resource_url)
            .json(usuario)
            .send()
            .await
            .map_err(|e| AppError::TransportError(format!("Supabase 요청 실패: {}", e)))?;

        Self::into_reply(response).await
    }

    async fn select_all(&self) -> AppResult<RemoteReply> {
        let response = self
            .client
            .get(&self.resource_url)
            .query(&[("select", "*")])
            .send()
            .await
            .map_err(|e| AppError::TransportError(format!("Supabase 요청 실패: {}", e)))?;

        Self::into_reply(response).await
    }
}

/// 테스트용 저장소 대역
///
/// 호출 횟수와 전달받은 레코드를 기록하고, 미리 정한 응답을 돌려줍니다.
#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    pub struct RecordingStore {
        reply: Result<RemoteReply, String>,
        calls: AtomicUsize,
        inserted: Mutex<Vec<NuevoUsuario>>,
    }

    impl RecordingStore {
        pub fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(RemoteReply::new(status, body)),
                calls: AtomicUsize::new(0),
                inserted: Mutex::new(Vec::new()),
            }
        }

        pub fn unreachable(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                inserted: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn inserted(&self) -> Vec<NuevoUsuario> {
            self.inserted.lock().unwrap().clone()
        }

        fn respond(&self) -> AppResult<RemoteReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .clone()
                .map_err(AppError::TransportError)
        }
    }

    #[async_trait]
    impl UsuarioStore for RecordingStore {
        async fn insert(&self, usuario: &NuevoUsuario) -> AppResult<RemoteReply> {
            self.inserted.lock().unwrap().push(usuario.clone());
            self.respond()
        }

        async fn select_all(&self) -> AppResult<RemoteReply> {
            self.respond()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::dev::ServerHandle;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use serde_json::{json, Value};

    use super::*;

    fn header(req: &HttpRequest, name: &str) -> Value {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(|value| Value::String(value.to_string()))
            .unwrap_or(Value::Null)
    }

    fn echo_headers(req: &HttpRequest) -> Value {
        json!({
            "apikey": header(req, "apikey"),
            "authorization": header(req, "authorization"),
            "content_type": header(req, "content-type"),
            "accept": header(req, "accept"),
            "prefer": header(req, "prefer"),
        })
    }

    async fn fake_insert(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
        HttpResponse::Created().json(json!({
            "headers": echo_headers(&req),
            "body": body.into_inner(),
        }))
    }

    async fn fake_select(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().json(json!({
            "headers": echo_headers(&req),
            "query": req.query_string(),
        }))
    }

    fn local_repo(config: SupabaseConfig) -> SupabaseUsuarioRepository {
        SupabaseUsuarioRepository::with_builder(Client::builder().no_proxy(), &config).unwrap()
    }

    /// Supabase 역할을 하는 로컬 서버를 임의 포트에 띄웁니다.
    fn spawn_fake_supabase() -> (String, ServerHandle) {
        let server = HttpServer::new(|| {
            App::new()
                .route("/rest/v1/usuarios", web::post().to(fake_insert))
                .route("/rest/v1/usuarios", web::get().to(fake_select))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        (format!("http://{}", addr), handle)
    }

    #[actix_web::test]
    async fn test_insert_posts_record_with_fixed_headers() {
        let (base_url, handle) = spawn_fake_supabase();
        let repo = local_repo(SupabaseConfig::new(base_url, "test-key"));

        let usuario = NuevoUsuario::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "CLIENTE".to_string(),
        );
        let reply = repo.insert(&usuario).await.unwrap();
        handle.stop(true).await;

        assert_eq!(reply.status, 201);
        let echoed: Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(echoed["body"], serde_json::to_value(&usuario).unwrap());
        assert_eq!(echoed["headers"]["apikey"], "test-key");
        assert_eq!(echoed["headers"]["authorization"], "Bearer test-key");
        assert_eq!(echoed["headers"]["content_type"], "application/json");
        assert_eq!(echoed["headers"]["accept"], "application/json");
        assert_eq!(echoed["headers"]["prefer"], "return=representation");
    }

    #[actix_web::test]
    async fn test_select_all_requests_every_column() {
        let (base_url, handle) = spawn_fake_supabase();
        let repo = local_repo(SupabaseConfig::new(base_url, "test-key"));

        let reply = repo.select_all().await.unwrap();
        handle.stop(true).await;

        assert_eq!(reply.status, 200);
        let echoed: Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(echoed["query"], "select=*");
        assert_eq!(echoed["headers"]["apikey"], "test-key");
    }

    #[actix_web::test]
    async fn test_unknown_path_status_is_returned_verbatim() {
        let (base_url, handle) = spawn_fake_supabase();
        let config = SupabaseConfig::new(format!("{}/missing", base_url), "test-key");
        let repo = local_repo(config);

        let reply = repo.select_all().await.unwrap();
        handle.stop(true).await;

        assert_eq!(reply.status, 404);
    }

    #[actix_web::test]
    async fn test_unreachable_remote_is_transport_error() {
        let config = SupabaseConfig::new("http://127.0.0.1:1", "test-key")
            .with_timeout(Duration::from_secs(2));
        let repo = local_repo(config);

        let result = repo.select_all().await;

        assert!(matches!(result, Err(AppError::TransportError(_))));
    }

    #[test]
    fn test_resource_url_points_at_usuarios_table() {
        let repo =
            SupabaseUsuarioRepository::new(&SupabaseConfig::new("https://demo.supabase.co", "k"))
                .unwrap();

        assert_eq!(repo.resource_url, "https://demo.supabase.co/rest/v1/usuarios");
    }
}
