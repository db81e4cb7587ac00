//! 세션 갱신 서비스
//!
//! 리프레시 토큰 하나를 받아 새 토큰 쌍을 발급하는 선형 파이프라인입니다.
//!
//! ```text
//! decode(검증 없음) → 만료 확인 → 저장소 조회(user_id + 토큰) → 발급 → $addToSet → 응답
//! ```
//!
//! 저장소에 대한 쓰기는 모든 검증이 끝난 뒤 한 번만 일어납니다.
//! 사용된 리프레시 토큰은 목록에서 제거되지 않으므로 만료 전까지 재사용할 수 있습니다.

use std::sync::Arc;

use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::domain::models::token::token::TokenPair;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::UserStore;
use crate::services::auth::token_service::TokenService;

/// 세션 갱신 서비스
///
/// 설정과 저장소는 생성자로 주입됩니다.
#[derive(Clone)]
pub struct SessionRefreshService {
    tokens: TokenService,
    store: Arc<dyn UserStore>,
}

impl SessionRefreshService {
    pub fn new(tokens: TokenService, store: Arc<dyn UserStore>) -> Self {
        Self { tokens, store }
    }

    /// 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MalformedToken` - 토큰 해석 실패
    /// * `AppError::TokenExpired` - `exp`가 현재 시각보다 이전 (저장소 조회 전에 판단)
    /// * `AppError::InvalidToken` - 해당 사용자의 토큰 목록에 없음
    /// * `AppError::StoreUnavailable` - 저장소 접근 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pair = session_service.refresh(refresh_token).await?;
    /// println!("new refresh token: {}", pair.refresh_token);
    /// ```
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = self.tokens.decode_unverified(refresh_token)?;

        let now = Utc::now();
        if claims.is_expired_at(now) {
            log::debug!("만료된 리프레시 토큰 - user_id: {}", claims.user.user_id);
            return Err(AppError::TokenExpired);
        }

        let user_id = ObjectId::parse_str(&claims.user.user_id).map_err(|_| {
            log::debug!("ObjectId 형식이 아닌 user_id: {}", claims.user.user_id);
            AppError::InvalidToken
        })?;

        let owner = match self.store.find_session_owner(&user_id, refresh_token).await? {
            Some(owner) => owner,
            None => {
                log::debug!("저장소에 없는 리프레시 토큰 - user_id: {}", user_id);
                return Err(AppError::InvalidToken);
            }
        };

        let pair = self.tokens.issue_pair(&owner, now)?;

        self.store.append_token(&owner.id, &pair).await?;

        log::info!(
            "세션 갱신 완료 - user_id: {}, remember_me: {}",
            owner.id,
            owner.remember_me
        );

        Ok(pair)
    }
}
