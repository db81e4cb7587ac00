//! # Domain Entities
//!
//! MongoDB 컬렉션에 저장되는 엔티티들입니다.

pub mod users;

pub use users::user::*;
