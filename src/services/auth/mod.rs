//! 인증 및 세션 서비스 모듈
//!
//! 리프레시 토큰으로 세션을 갱신하는 데 필요한 서비스들을 제공합니다.
//!
//! - [`signing_secret`] - 정적 비밀키에서 HMAC 서명 키 파생 (bcrypt)
//! - [`token_service`] - JWT 해석/검증/발급
//! - [`session_service`] - 갱신 파이프라인
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{SessionRefreshService, TokenService};
//!
//! let tokens = TokenService::from_config(&session_config)?;
//! let service = SessionRefreshService::new(tokens, store);
//! let pair = service.refresh(refresh_token).await?;
//! ```

pub mod signing_secret;
pub mod token_service;
pub mod session_service;

pub use signing_secret::*;
pub use token_service::*;
pub use session_service::*;
