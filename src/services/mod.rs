//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성 시점에 리포지토리와 설정을 주입받으며,
//! 핸들러에서는 `web::Data<UsuarioService>`로 공유됩니다.

pub mod usuarios;
