//! # Domain Models
//!
//! 영속화되지 않는 값 객체들입니다. 토큰 클레임과 발급된 토큰 쌍이 여기에 속합니다.

pub mod token;

pub use token::token::*;
