//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, bcrypt cost, 서버 바인딩, Rate Limiting
//! - [`supabase_config`] - 원격 Supabase REST API 접속 정보
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수
//!
//! ```bash
//! export SUPABASE_URL="https://xyzcompany.supabase.co"
//! export SUPABASE_KEY="your-api-key"
//! ```
//!
//! ### 선택
//!
//! ```bash
//! export PROFILE="dev"                 # .env.dev / .env.prod 선택
//! export ENVIRONMENT="production"      # development, test, staging, production
//! export BCRYPT_COST="12"              # 4-15 범위
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SUPABASE_TIMEOUT_SECS="30"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;
pub mod supabase_config;

pub use data_config::*;
pub use supabase_config::*;
