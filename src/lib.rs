//! 세션 갱신 서비스
//!
//! 리프레시 토큰을 받아 새 액세스/리프레시 토큰 쌍을 발급하는 단일 엔드포인트 서비스입니다.
//! 토큰은 사용자 문서의 `tokens` 목록에 정확히 같은 문자열이 있을 때만 유효하며,
//! 새로 발급된 쌍은 같은 목록에 추가됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← POST /api/v1/auth/refresh, GET /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← refreshToken 헤더 추출, 응답 직렬화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 해석 → 만료 확인 → 조회 → 발급 → 추가
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (MongoDB / Memory)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use session_refresh_service::config::{Environment, SessionConfig};
//! use session_refresh_service::repositories::users::InMemoryUserStore;
//! use session_refresh_service::services::auth::{SessionRefreshService, TokenService};
//!
//! let config = SessionConfig::from_env(&Environment::current())?;
//! let tokens = TokenService::from_config(&config)?;
//! let service = SessionRefreshService::new(tokens, Arc::new(InMemoryUserStore::new()));
//!
//! let pair = service.refresh(refresh_token).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
