//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 세션 갱신 파이프라인의 모든 종료 상태를 하나의 열거형으로 표현합니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 각 실패 원인을
//! 고유한 HTTP 상태 코드와 메시지로 변환합니다.
//!
//! ## 응답 정책
//!
//! | 변형 | 상태 코드 | 메시지 |
//! |------|-----------|--------|
//! | `TokenExpired` | 412 | `Token Expired` |
//! | `InvalidToken` | 403 | `Invalid Token` |
//! | `MalformedToken` | 400 | `Malformed Token` |
//! | `StoreUnavailable` | 503 | `Service Unavailable` |
//! | `ConfigError`, `InternalError` | 500 | `Internal Server Error` |
//!
//! 상세 원인은 응답 본문에 포함되지 않으며 로그로만 남습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, ErrorContext};
//!
//! let hash = bcrypt::hash_with_salt(secret, cost, salt)
//!     .context("서명 비밀키 파생 실패")?;
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 토큰에 포함된 만료 시간이 지남 (412 Precondition Failed)
    #[error("Token Expired")]
    TokenExpired,

    /// 형식은 올바르지만 저장소에 없는 토큰 (403 Forbidden)
    #[error("Invalid Token")]
    InvalidToken,

    /// 헤더 누락, JWT 형식 아님, 필수 클레임 누락 (400 Bad Request)
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// 사용자 저장소 접근 실패 (503 Service Unavailable)
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// 잘못된 설정값 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 메시지만 담는 응답 본문
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

impl AppError {
    /// 클라이언트에게 노출되는 메시지
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::TokenExpired => "Token Expired",
            AppError::InvalidToken => "Invalid Token",
            AppError::MalformedToken(_) => "Malformed Token",
            AppError::StoreUnavailable(_) => "Service Unavailable",
            AppError::ConfigError(_) | AppError::InternalError(_) => "Internal Server Error",
        }
    }

    /// 요청 처리 흐름상 예상 가능한 거절인지 여부
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::TokenExpired | AppError::InvalidToken)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::TokenExpired => StatusCode::PRECONDITION_FAILED,
            AppError::InvalidToken => StatusCode::FORBIDDEN,
            AppError::MalformedToken(_) => StatusCode::BAD_REQUEST,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 본문은 항상 `{"message": ...}` 형식입니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(MessageBody {
            message: self.public_message(),
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

/// 드라이버 에러 변환
///
/// BSON 변환 실패는 저장소 장애가 아니라 문서 형태 문제이므로 `InternalError`로 분류합니다.
impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match e.kind.as_ref() {
            ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
                AppError::InternalError(format!("BSON 변환 실패: {}", e))
            }
            _ => AppError::StoreUnavailable(e.to_string()),
        }
    }
}
