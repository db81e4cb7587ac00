//! # 사용자 리포지토리 구현
//!
//! 세션 갱신에 필요한 두 가지 연산만 제공하는 사용자 저장소입니다.
//!
//! - `find_session_owner`: `_id` + `tokens.refresh_token` 조건으로 조회, `{_id, remember_me, email}` 투영
//! - `append_token`: `$addToSet`으로 토큰 쌍 추가 (기존 항목은 삭제하지 않음)
//!
//! 저장소는 [`UserStore`] trait 뒤에 숨겨져 있으므로 서비스 계층은
//! MongoDB 구현과 메모리 구현을 구분하지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{self, doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::users::user::{SessionOwner, User};
use crate::domain::models::token::token::TokenPair;
use crate::errors::{AppError, AppResult, ErrorContext};

/// 세션 갱신이 사용하는 사용자 저장소 인터페이스
#[async_trait]
pub trait UserStore: Send + Sync {
    /// `user_id` 사용자의 토큰 목록에 `refresh_token`이 정확히 존재하면 소유자 정보를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(SessionOwner))` - 사용자와 토큰이 모두 일치
    /// * `Ok(None)` - 사용자가 없거나 토큰이 목록에 없음
    /// * `Err(AppError::StoreUnavailable)` - 저장소 접근 실패
    async fn find_session_owner(
        &self,
        user_id: &ObjectId,
        refresh_token: &str,
    ) -> AppResult<Option<SessionOwner>>;

    /// 사용자 토큰 목록에 토큰 쌍을 추가합니다.
    ///
    /// 완전히 같은 토큰 쌍이 이미 있으면 아무것도 추가하지 않습니다.
    async fn append_token(&self, user_id: &ObjectId, token: &TokenPair) -> AppResult<()>;
}

/// MongoDB `users` 컬렉션 기반 저장소
///
/// ## 인덱스
/// - `tokens.refresh_token` (multikey): 리프레시 토큰 조회용
#[derive(Clone)]
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.get_database().collection::<T>(Self::COLLECTION)
    }

    /// 리프레시 토큰 조회에 필요한 인덱스를 생성합니다.
    ///
    /// 이미 존재하는 인덱스는 MongoDB가 무시하므로 시작 시마다 호출해도 됩니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "tokens.refresh_token": 1 })
            .options(
                IndexOptions::builder()
                    .name("tokens_refresh_token".to_string())
                    .build(),
            )
            .build();

        self.collection::<User>().create_index(index).await?;

        log::info!("✅ users.tokens.refresh_token 인덱스 확인 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_session_owner(
        &self,
        user_id: &ObjectId,
        refresh_token: &str,
    ) -> AppResult<Option<SessionOwner>> {
        self.collection::<SessionOwner>()
            .find_one(doc! {
                "_id": *user_id,
                "tokens.refresh_token": refresh_token,
            })
            .projection(doc! { "_id": 1, "remember_me": 1, "email": 1 })
            .await
            .map_err(AppError::from)
    }

    async fn append_token(&self, user_id: &ObjectId, token: &TokenPair) -> AppResult<()> {
        let token = bson::to_bson(token).context("토큰 쌍 BSON 변환 실패")?;

        let result = self
            .collection::<User>()
            .update_one(
                doc! { "_id": *user_id },
                doc! { "$addToSet": { "tokens": token } },
            )
            .await?;

        if result.matched_count == 0 {
            log::warn!("토큰 추가 대상 사용자가 없습니다 - user_id: {}", user_id);
        }

        Ok(())
    }
}
