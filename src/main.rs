//! 세션 갱신 서비스 메인 애플리케이션
//!
//! 설정을 읽고, 서명 키를 한 번 파생하고, 사용자 저장소를 연결한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use session_refresh_service::config::{
    Environment, ServerConfig, SessionConfig, StoreConfig, UserStoreBackend,
};
use session_refresh_service::db::Database;
use session_refresh_service::errors::AppResult;
use session_refresh_service::handlers::session_handlers::REFRESH_TOKEN_HEADER;
use session_refresh_service::repositories::users::{
    InMemoryUserStore, MongoUserRepository, UserStore,
};
use session_refresh_service::routes::configure_all_routes;
use session_refresh_service::services::auth::{SessionRefreshService, TokenService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 세션 갱신 서비스 시작중...");

    let session_service = match build_session_service().await {
        Ok(service) => web::Data::new(service),
        Err(e) => {
            error!("서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(session_service).await
}

/// 설정을 읽어 세션 갱신 서비스를 조립합니다
///
/// 서명 키 파생(bcrypt)은 여기서 한 번만 수행됩니다.
async fn build_session_service() -> AppResult<SessionRefreshService> {
    let environment = Environment::current();
    info!("실행 환경: {:?}", environment);

    let session_config = SessionConfig::from_env(&environment)?;
    info!("세션 설정 로드됨: {:?}", session_config);

    let tokens = TokenService::from_config(&session_config)?;
    let store = initialize_user_store(&StoreConfig::from_env()).await?;

    Ok(SessionRefreshService::new(tokens, store))
}

/// 설정된 백엔드로 사용자 저장소를 초기화합니다
async fn initialize_user_store(config: &StoreConfig) -> AppResult<Arc<dyn UserStore>> {
    match config.backend {
        UserStoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::connect(config).await?);
            let repository = MongoUserRepository::new(database.clone());
            repository.ensure_indexes().await?;

            info!("✅ 사용자 저장소: MongoDB ({})", database.database_name());
            Ok(Arc::new(repository))
        }
        UserStoreBackend::Memory => {
            log::warn!("⚠️ 메모리 사용자 저장소 사용 중 - 재시작 시 모든 토큰이 사라집니다");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(
    session_service: web::Data<SessionRefreshService>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Refresh: POST http://{}/api/v1/auth/refresh", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(session_service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr로 출력
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] env 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 브라우저 클라이언트가 `refreshToken` 헤더를 보낼 수 있도록 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            HeaderName::from_static(REFRESH_TOKEN_HEADER),
        ])
        .supports_credentials()
        .max_age(3600)
}
