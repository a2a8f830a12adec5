//! # Data Transfer Objects
//!
//! 클라이언트와 주고받는 JSON 구조를 정의합니다.
//! 필드 이름은 공개 API의 스키마(`nombre`, `correo`, `password`, `rol`)를 그대로 따릅니다.

pub mod usuarios;

pub use usuarios::*;
