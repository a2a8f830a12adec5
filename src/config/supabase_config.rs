//! # Supabase Configuration
//!
//! 원격 REST 저장소(Supabase)에 접근하기 위한 설정입니다.
//! 서버 시작 시 한 번 로드되어 리포지토리 생성자에 주입되며, 이후 변경되지 않습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export SUPABASE_URL="https://xyzcompany.supabase.co"
//! export SUPABASE_KEY="service-role-or-anon-key"
//! export SUPABASE_TIMEOUT_SECS="30"   # 선택
//! ```

use std::env;
use std::time::Duration;

use log::warn;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::core::errors::{AppError, AppResult};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Supabase 접속 설정
#[derive(Clone)]
pub struct SupabaseConfig {
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SupabaseConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - `SUPABASE_URL`이 없거나 비어 있는 경우
    pub fn from_env() -> AppResult<Self> {
        Self::from_source(|name| env::var(name).ok())
    }

    /// 임의의 키-값 소스에서 설정을 읽습니다.
    ///
    /// `SUPABASE_KEY`가 없으면 빈 키로 진행하고, 원격 서비스가 돌려주는 인증 에러를
    /// 그대로 클라이언트에 전달합니다. URL이 없으면 요청을 보낼 주소 자체가 없으므로 에러입니다.
    pub fn from_source<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("SUPABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError("SUPABASE_URL must be set".to_string()))?;

        let api_key = lookup("SUPABASE_KEY").unwrap_or_else(|| {
            warn!("SUPABASE_KEY가 설정되지 않았습니다. 원격 요청은 인증 없이 전송됩니다");
            String::new()
        });

        let timeout = match lookup("SUPABASE_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "SUPABASE_TIMEOUT_SECS 파싱 실패: {}. 기본값 {}초 사용",
                        raw, DEFAULT_TIMEOUT_SECS
                    );
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self::new(base_url, api_key).with_timeout(timeout))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 테이블에 대한 PostgREST 리소스 URL (`<base>/rest/v1/<table>`)
    pub fn resource_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// 모든 원격 요청에 붙는 고정 헤더
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - API 키에 헤더로 쓸 수 없는 문자가 포함된 경우
    pub fn default_headers(&self) -> AppResult<HeaderMap> {
        let mut api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| AppError::ConfigError(format!("SUPABASE_KEY 헤더 변환 실패: {}", e)))?;
        api_key.set_sensitive(true);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| AppError::ConfigError(format!("Authorization 헤더 변환 실패: {}", e)))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("apikey"), api_key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("prefer"),
            HeaderValue::from_static("return=representation"),
        );
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_url_is_config_error() {
        let result = SupabaseConfig::from_source(source(&[("SUPABASE_KEY", "key")]));

        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_missing_key_falls_back_to_empty() {
        let config =
            SupabaseConfig::from_source(source(&[("SUPABASE_URL", "https://demo.supabase.co")]))
                .unwrap();

        assert_eq!(config.api_key(), "");
        assert!(config.default_headers().is_ok());
    }

    #[test]
    fn test_resource_url_trims_trailing_slash() {
        let config = SupabaseConfig::new("https://demo.supabase.co/", "key");

        assert_eq!(
            config.resource_url("usuarios"),
            "https://demo.supabase.co/rest/v1/usuarios"
        );
    }

    #[test]
    fn test_timeout_parsing() {
        let config = SupabaseConfig::from_source(source(&[
            ("SUPABASE_URL", "https://demo.supabase.co"),
            ("SUPABASE_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));

        let config = SupabaseConfig::from_source(source(&[
            ("SUPABASE_URL", "https://demo.supabase.co"),
            ("SUPABASE_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_default_headers() {
        let config = SupabaseConfig::new("https://demo.supabase.co", "anon-key");
        let headers = config.default_headers().unwrap();

        assert_eq!(headers["apikey"], "anon-key");
        assert_eq!(headers[AUTHORIZATION], "Bearer anon-key");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers["prefer"], "return=representation");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = SupabaseConfig::new("https://demo.supabase.co", "very-secret-key");

        assert!(!format!("{:?}", config).contains("very-secret-key"));
    }

    #[test]
    fn test_key_with_newline_is_rejected() {
        let config = SupabaseConfig::new("https://demo.supabase.co", "bad\nkey");

        assert!(matches!(config.default_headers(), Err(AppError::ConfigError(_))));
    }
}
