//! # Configuration Module
//!
//! 세션 갱신 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정은 프로세스 시작 시 한 번 읽혀 타입이 있는 값으로 변환되고,
//! 필요한 컴포넌트에 명시적으로 주입됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 사용자 저장소 설정
//! - [`auth_config`] - JWT 서명 비밀키, 비밀키 파생 cost, 토큰 유효 기간
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="production"
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 토큰 설정
//! export JWT_SECRET="your-super-secret-key"
//! export SALT_ROUNDS="12"
//!
//! # 저장소 설정
//! export USER_STORE="mongodb"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="session_refresh"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
