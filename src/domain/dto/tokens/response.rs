use serde::Serialize;

use crate::domain::models::TokenPair;

/// 세션 갱신 성공 응답 (`{"token": {...}}`)
#[derive(Debug, Serialize)]
pub struct RefreshSessionResponse {
    pub token: TokenPair,
}

impl From<TokenPair> for RefreshSessionResponse {
    fn from(token: TokenPair) -> Self {
        Self { token }
    }
}
