//! JWT 세션 토큰 발급/해석 서비스
//!
//! 들어온 리프레시 토큰을 서명 검증 없이 해석하고, 새 액세스/리프레시 토큰 쌍을
//! HMAC-SHA256으로 서명해 발급합니다. 서명 키는 생성 시 한 번 파생된
//! [`SigningSecret`]을 사용합니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::domain::entities::users::user::SessionOwner;
use crate::domain::models::token::token::{SessionClaims, TokenPair, TokenSubject};
use crate::errors::{AppError, AppResult};
use crate::services::auth::signing_secret::SigningSecret;

/// JWT 토큰 관리 서비스
#[derive(Debug, Clone)]
pub struct TokenService {
    secret: SigningSecret,
    validity: Duration,
}

impl TokenService {
    pub fn new(secret: SigningSecret, validity: Duration) -> Self {
        Self { secret, validity }
    }

    /// 설정값으로 서비스를 만듭니다. 서명 키 파생이 여기서 한 번 수행됩니다.
    pub fn from_config(config: &SessionConfig) -> AppResult<Self> {
        let secret = SigningSecret::from_config(config)?;
        log::info!("🔑 토큰 서명 키 파생 완료 (fingerprint: {})", secret.fingerprint());

        Ok(Self::new(secret, config.token_validity()))
    }

    /// 서명을 검증하지 않고 클레임만 추출합니다.
    ///
    /// 만료 여부도 여기서는 판단하지 않습니다. `exp`, `user.user_id`가 없으면 실패합니다.
    /// `exp`는 음수나 소수여도 숫자이기만 하면 받아들입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MalformedToken` - JWT 형식이 아니거나 필수 클레임이 없음
    pub fn decode_unverified(&self, token: &str) -> AppResult<SessionClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        // `exp` 존재 여부는 SessionClaims 역직렬화가 확인
        validation.set_required_spec_claims::<&str>(&[]);

        decode::<SessionClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::MalformedToken(e.to_string()))
    }

    /// 이 서비스가 발급한 토큰의 서명과 만료를 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 만료된 토큰
    /// * `AppError::InvalidToken` - 서명 불일치
    /// * `AppError::MalformedToken` - 그 외 해석 실패
    #[cfg(test)]
    pub fn verify(&self, token: &str) -> AppResult<SessionClaims> {
        use jsonwebtoken::errors::ErrorKind;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_aud = false;

        decode::<SessionClaims>(token, self.secret.decoding_key(), &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                ErrorKind::InvalidSignature => AppError::InvalidToken,
                _ => AppError::MalformedToken(e.to_string()),
            })
    }

    /// 세션 소유자에게 새 토큰 쌍을 발급합니다.
    ///
    /// 두 토큰은 같은 만료 시각(`issued_at + validity`)을 공유합니다.
    pub fn issue_pair(&self, owner: &SessionOwner, issued_at: DateTime<Utc>) -> AppResult<TokenPair> {
        let expires_at = issued_at + self.validity;
        let user_id = owner.id_string();

        let access_token = self.sign(TokenSubject {
            user_id: user_id.clone(),
            email: Some(owner.email.clone()),
        }, issued_at, expires_at)?;

        let refresh_token = self.sign(TokenSubject {
            user_id,
            email: None,
        }, issued_at, expires_at)?;

        let expiration_timestamp = expires_at.timestamp_millis();

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_token_expiration_timestamp: expiration_timestamp,
            refresh_token_expiration_timestamp: expiration_timestamp,
        })
    }

    fn sign(
        &self,
        user: TokenSubject,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> AppResult<String> {
        let claims = SessionClaims {
            user,
            exp: expires_at.timestamp() as f64,
            iat: Some(issued_at.timestamp()),
            jti: Some(Uuid::new_v4().to_string()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.secret.encoding_key())
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }
}
