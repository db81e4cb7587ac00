//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](user_repo::UserStore) trait과 두 가지 구현을 제공합니다.
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB `users` 컬렉션
//! - [`InMemoryUserStore`](memory_repo::InMemoryUserStore) - 로컬 개발/테스트용 메모리 저장소

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::*;
pub use memory_repo::*;
