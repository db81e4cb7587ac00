//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::StoreConfig;
//! use crate::db::Database;
//!
//! let database = Arc::new(Database::connect(&StoreConfig::from_env()).await?);
//! let repo = MongoUserRepository::new(database);
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;

use crate::config::StoreConfig;
use crate::errors::AppResult;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 연결 URI를 파싱해 클라이언트를 만들고 `ping` 명령으로 연결 상태를 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::StoreUnavailable` - URI 파싱 실패 또는 서버 응답 없음
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("session_refresh".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// 리포지토리에서 컬렉션에 접근할 때 사용하는 데이터베이스 핸들
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
