//! 원격 저장소에 기록되는 엔티티

pub mod usuarios;
