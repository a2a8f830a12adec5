//! 사용자 관련 응답 DTO

pub mod proxy_response;

pub use proxy_response::ProxyResponse;
