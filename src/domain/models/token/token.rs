//! JWT 세션 토큰 클레임과 발급된 토큰 쌍
//!
//! 액세스 토큰과 리프레시 토큰은 같은 클레임 구조를 공유합니다.
//! 액세스 토큰만 `user.email`을 포함합니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// 토큰이 가리키는 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSubject {
    /// 사용자 ID (MongoDB ObjectId 16진수 문자열)
    pub user_id: String,
    /// 사용자 이메일 (액세스 토큰에만 포함)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// 세션 토큰의 클레임(Payload)
///
/// ## 클레임 구성
///
/// - `user`: 토큰 주체 (`user_id`, 선택적으로 `email`)
/// - `exp`: 만료 시간 (Unix timestamp, 초). 외부 토큰은 음수나 소수일 수 있어 `f64`로 받습니다.
/// - `iat`: 발급 시간 (외부에서 발급된 토큰에는 없을 수 있음)
/// - `jti`: 토큰 고유 ID (같은 초에 발급된 토큰끼리도 서로 다르게 만듦)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user: TokenSubject,
    #[serde(serialize_with = "serialize_numeric_date")]
    pub exp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl SessionClaims {
    /// `exp * 1000`이 `now`(밀리초)보다 작으면 만료된 것으로 봅니다.
    ///
    /// 두 값이 같은 경우는 아직 유효합니다.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp * 1000.0 < now.timestamp_millis() as f64
    }
}

/// 정수 값은 정수로 직렬화 (`jsonwebtoken`의 `exp` 검증은 정수만 인식)
fn serialize_numeric_date<S>(exp: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if exp.fract() == 0.0 && exp.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*exp as i64)
    } else {
        serializer.serialize_f64(*exp)
    }
}

/// 세션 갱신으로 발급되는 토큰 쌍
///
/// 호출자에게 반환되는 값과 사용자 문서의 `tokens` 배열에 저장되는 값이
/// 동일한 구조를 가집니다. 만료 시각은 Unix epoch 밀리초입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expiration_timestamp: i64,
    pub refresh_token_expiration_timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims_expiring_at(exp: i64) -> SessionClaims {
        SessionClaims {
            user: TokenSubject {
                user_id: "64b7f0c2a1b2c3d4e5f60718".to_string(),
                email: None,
            },
            exp: exp as f64,
            iat: None,
            jti: None,
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let past = claims_expiring_at((now - Duration::seconds(3600)).timestamp());
        let future = claims_expiring_at((now + Duration::seconds(3600)).timestamp());

        assert!(past.is_expired_at(now));
        assert!(!future.is_expired_at(now));
    }

    #[test]
    fn test_expiry_same_millisecond_is_valid() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let claims = claims_expiring_at(1_700_000_000);

        assert!(!claims.is_expired_at(now));
        assert!(claims.is_expired_at(now + Duration::milliseconds(1)));
    }

    #[test]
    fn test_negative_and_fractional_expiry() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

        let mut claims = claims_expiring_at(0);
        claims.exp = -5.0;
        assert!(claims.is_expired_at(now));

        claims.exp = 1_699_999_999.5;
        assert!(claims.is_expired_at(now));

        claims.exp = 1_700_000_000.5;
        assert!(!claims.is_expired_at(now));
    }

    #[test]
    fn test_whole_expiry_serializes_as_integer() {
        let claims = claims_expiring_at(1_700_000_000);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["exp"], serde_json::json!(1_700_000_000i64));

        let mut fractional = claims;
        fractional.exp = 1_700_000_000.5;
        let json = serde_json::to_value(&fractional).unwrap();
        assert_eq!(json["exp"].as_f64(), Some(1_700_000_000.5));
    }

    #[test]
    fn test_refresh_claims_omit_email() {
        let claims = claims_expiring_at(1_700_000_000);
        let json = serde_json::to_value(&claims).unwrap();

        assert!(json["user"].get("email").is_none());
        assert!(json.get("iat").is_none());
        assert_eq!(json["user"]["user_id"], "64b7f0c2a1b2c3d4e5f60718");
    }

    #[test]
    fn test_token_pair_field_names() {
        let pair = TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            access_token_expiration_timestamp: 1,
            refresh_token_expiration_timestamp: 1,
        };
        let json = serde_json::to_value(&pair).unwrap();

        assert_eq!(json.as_object().unwrap().len(), 4);
        assert!(json.get("access_token_expiration_timestamp").is_some());
        assert!(json.get("refresh_token_expiration_timestamp").is_some());
    }
}
