//! User Entity Implementation
//!
//! 세션 갱신에 필요한 범위의 사용자 엔티티입니다.
//! 사용자 문서는 지금까지 발급된 토큰 쌍 목록을 가지며,
//! 리프레시 토큰 검증은 이 목록에 정확히 같은 문자열이 있는지로 판단합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::models::token::token::TokenPair;

/// 사용자 엔티티 (`users` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 로그인 유지 여부
    #[serde(default)]
    pub remember_me: bool,
    /// 발급된 토큰 쌍 목록 (추가만 됨)
    #[serde(default)]
    pub tokens: Vec<TokenPair>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 토큰 목록이 비어 있는 새 사용자
    pub fn new(email: String, remember_me: bool) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            remember_me,
            tokens: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 주어진 리프레시 토큰이 발급 목록에 있는지 확인
    pub fn holds_refresh_token(&self, refresh_token: &str) -> bool {
        self.tokens.iter().any(|t| t.refresh_token == refresh_token)
    }

    /// 세션 소유자 투영값으로 변환 (`id`가 없으면 `None`)
    pub fn to_session_owner(&self) -> Option<SessionOwner> {
        self.id.map(|id| SessionOwner {
            id,
            remember_me: self.remember_me,
            email: self.email.clone(),
        })
    }
}

/// 리프레시 토큰 조회 결과 투영
///
/// `{_id, remember_me, email}` 세 필드만 읽어옵니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOwner {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub remember_me: bool,
    pub email: String,
}

impl SessionOwner {
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}
