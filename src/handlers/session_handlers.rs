use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::domain::RefreshSessionResponse;
use crate::errors::AppError;
use crate::services::auth::SessionRefreshService;

/// 리프레시 토큰을 담는 요청 헤더 (`refreshToken`, 대소문자 무관)
pub const REFRESH_TOKEN_HEADER: &str = "refreshtoken";

/// 세션 갱신 API 핸들러
///
/// `refreshToken` 헤더의 토큰으로 새 액세스/리프레시 토큰 쌍을 발급합니다.
///
/// # 응답
///
/// * `200` - `{"token": {...}}`
/// * `400` - 헤더 누락 또는 JWT 형식 아님
/// * `403` - 저장소에 없는 토큰 (`Invalid Token`)
/// * `412` - 만료된 토큰 (`Token Expired`)
/// * `503` - 사용자 저장소 접근 불가
#[post("/refresh")]
pub async fn refresh_session(
    req: HttpRequest,
    service: web::Data<SessionRefreshService>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = match extract_refresh_token(&req) {
        Ok(token) => token,
        Err(e) => {
            log::warn!("세션 갱신 요청 거부: {}", e);
            return Err(e);
        }
    };

    match service.refresh(refresh_token).await {
        Ok(token) => Ok(HttpResponse::Ok().json(RefreshSessionResponse::from(token))),
        Err(e) => {
            if e.is_rejection() {
                log::debug!("세션 갱신 거절: {}", e);
            } else if matches!(e, AppError::MalformedToken(_)) {
                log::warn!("세션 갱신 요청 거부: {}", e);
            } else {
                log::error!("세션 갱신 실패: {}", e);
            }
            Err(e)
        }
    }
}

/// 요청 헤더에서 리프레시 토큰 추출
///
/// 저장된 토큰과 정확히 같은 문자열로 비교하므로 값을 가공하지 않습니다.
fn extract_refresh_token(req: &HttpRequest) -> Result<&str, AppError> {
    req.headers()
        .get(REFRESH_TOKEN_HEADER)
        .ok_or_else(|| AppError::MalformedToken("refreshToken 헤더가 없습니다".to_string()))?
        .to_str()
        .map_err(|_| AppError::MalformedToken("refreshToken 헤더가 ASCII가 아닙니다".to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use mongodb::bson::oid::ObjectId;
    use serde_json::Value;

    use crate::domain::{SessionClaims, TokenPair, TokenSubject, User};
    use crate::repositories::users::InMemoryUserStore;
    use crate::routes::configure_all_routes;
    use crate::services::auth::{SigningSecret, TokenService};

    use super::*;

    fn client_token(user_id: &str, exp_offset: Duration) -> String {
        let claims = SessionClaims {
            user: TokenSubject {
                user_id: user_id.to_string(),
                email: None,
            },
            exp: (Utc::now() + exp_offset).timestamp() as f64,
            iat: None,
            jti: None,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(b"legacy")).unwrap()
    }

    fn seeded_store(id: ObjectId, stored_refresh_token: Option<&str>) -> Arc<InMemoryUserStore> {
        let store = Arc::new(InMemoryUserStore::new());
        let mut user = User::new("frank@example.com".to_string(), false);
        user.id = Some(id);
        if let Some(token) = stored_refresh_token {
            user.tokens.push(TokenPair {
                access_token: "old-access".to_string(),
                refresh_token: token.to_string(),
                access_token_expiration_timestamp: 0,
                refresh_token_expiration_timestamp: 0,
            });
        }
        store.insert(user).unwrap();
        store
    }

    fn session_service(store: Arc<InMemoryUserStore>) -> web::Data<SessionRefreshService> {
        let tokens = TokenService::new(
            SigningSecret::derive("handler-secret", 4).unwrap(),
            Duration::days(7),
        );
        web::Data::new(SessionRefreshService::new(tokens, store))
    }

    #[actix_web::test]
    async fn test_expired_token_returns_precondition_failed() {
        let id = ObjectId::new();
        let token = client_token(&id.to_hex(), Duration::seconds(-3600));
        let app = test::init_service(
            App::new()
                .app_data(session_service(seeded_store(id, Some(&token))))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .insert_header(("refreshToken", token.as_str()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PRECONDITION_FAILED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Token Expired");
    }

    #[actix_web::test]
    async fn test_unknown_token_returns_forbidden() {
        let id = ObjectId::new();
        let token = client_token(&id.to_hex(), Duration::seconds(3600));
        let app = test::init_service(
            App::new()
                .app_data(session_service(seeded_store(id, None)))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .insert_header(("refreshToken", token.as_str()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid Token");
    }

    #[actix_web::test]
    async fn test_stored_token_returns_new_pair() {
        let id = ObjectId::new();
        let token = client_token(&id.to_hex(), Duration::seconds(3600));
        let store = seeded_store(id, Some(&token));
        let app = test::init_service(
            App::new()
                .app_data(session_service(store.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let before = Utc::now();
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .insert_header(("refreshToken", token.as_str()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let issued = body["token"].as_object().unwrap();
        assert_eq!(issued.len(), 4);

        let access_exp = issued["access_token_expiration_timestamp"].as_i64().unwrap();
        let refresh_exp = issued["refresh_token_expiration_timestamp"].as_i64().unwrap();
        assert_eq!(access_exp, refresh_exp);

        let expected = (before + Duration::days(7)).timestamp_millis();
        assert!((refresh_exp - expected).abs() < 5_000);

        assert_ne!(issued["refresh_token"].as_str().unwrap(), token);
        assert_eq!(store.get(&id).unwrap().unwrap().tokens.len(), 2);
    }

    #[actix_web::test]
    async fn test_missing_header_returns_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(session_service(seeded_store(ObjectId::new(), None)))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Malformed Token");
    }

    #[::core::prelude::v1::test]
    fn test_header_value_is_passed_through_unchanged() {
        let req = test::TestRequest::default()
            .insert_header(("refreshToken", " abc.def.ghi "))
            .to_http_request();

        assert_eq!(extract_refresh_token(&req).unwrap(), " abc.def.ghi ");
    }

    #[actix_web::test]
    async fn test_garbage_token_returns_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(session_service(seeded_store(ObjectId::new(), None)))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .insert_header(("refreshToken", "garbage"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
