//! # Data Transfer Objects
//!
//! HTTP 응답 본문으로 직렬화되는 구조체들입니다.

pub mod tokens;

pub use tokens::response::*;
