//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 `Arc<dyn UserStore>`만 알고 있으며, 실제 구현은
//! `main`에서 설정(`USER_STORE`)에 따라 선택되어 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(database));
//! let owner = store.find_session_owner(&user_id, refresh_token).await?;
//! ```

pub mod users;
