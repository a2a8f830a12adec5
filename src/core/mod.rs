//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 타입을 제공합니다.
//! 현재는 에러 시스템([`errors`])만 포함합니다.

pub mod errors;

pub use errors::*;
