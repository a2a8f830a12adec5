//! # Domain Models
//!
//! 원격 응답을 해석한 결과를 표현하는 모델입니다.

pub mod outcome;

pub use outcome::{RemoteOperation, RemoteOutcome, USUARIO_YA_EXISTE};
