//! 프로세스 메모리 기반 사용자 저장소
//!
//! 로컬 개발(`USER_STORE=memory`)과 테스트에서 MongoDB 없이 세션 갱신 흐름을
//! 실행하기 위한 구현입니다. MongoDB 구현과 같은 조회/추가 규칙을 따릅니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::user::{SessionOwner, User};
use crate::domain::models::token::token::TokenPair;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::UserStore;

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자를 저장하고 ID를 반환합니다. ID가 없으면 새로 발급합니다.
    pub fn insert(&self, mut user: User) -> AppResult<ObjectId> {
        let id = *user.id.get_or_insert_with(ObjectId::new);

        self.users
            .write()
            .map_err(|_| poisoned())?
            .insert(id, user);

        Ok(id)
    }

    /// 사용자 문서 전체 복사본
    pub fn get(&self, user_id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .map_err(|_| poisoned())?
            .get(user_id)
            .cloned())
    }
}

fn poisoned() -> AppError {
    AppError::InternalError("in-memory user store lock poisoned".to_string())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_session_owner(
        &self,
        user_id: &ObjectId,
        refresh_token: &str,
    ) -> AppResult<Option<SessionOwner>> {
        let users = self.users.read().map_err(|_| poisoned())?;

        Ok(users
            .get(user_id)
            .filter(|user| user.holds_refresh_token(refresh_token))
            .and_then(User::to_session_owner))
    }

    async fn append_token(&self, user_id: &ObjectId, token: &TokenPair) -> AppResult<()> {
        let mut users = self.users.write().map_err(|_| poisoned())?;

        match users.get_mut(user_id) {
            Some(user) => {
                if !user.tokens.contains(token) {
                    user.tokens.push(token.clone());
                }
            }
            None => {
                log::warn!("토큰 추가 대상 사용자가 없습니다 - user_id: {}", user_id);
            }
        }

        Ok(())
    }
}
