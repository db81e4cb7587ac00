//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 설정과 저장소를 주입받으며, actix-web 애플리케이션에는
//! `web::Data`로 등록됩니다.

pub mod auth;
