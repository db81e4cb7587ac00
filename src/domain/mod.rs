//! # Domain Layer
//!
//! 세션 갱신 서비스의 도메인 타입들을 모아 둔 모듈입니다.
//!
//! - [`entities`] - `users` 컬렉션 문서와 조회 투영
//! - [`models`] - JWT 클레임, 발급된 토큰 쌍
//! - [`dto`] - HTTP 응답 본문

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
