//! # Session Token Configuration
//!
//! 세션 갱신 시 토큰 서명과 만료 정책에 필요한 설정을 관리합니다.
//! 프로세스 시작 시 한 번 읽어 [`SessionConfig`] 값으로 만들고,
//! 이후에는 서비스 생성자에 명시적으로 전달합니다. 요청 처리 중에는
//! 환경 변수를 다시 읽지 않습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"   # 프로덕션 필수
//! export SALT_ROUNDS="12"                         # 4-31, 기본값은 환경별
//! export TOKEN_VALIDITY_DAYS="7"                  # 기본값 7
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, SessionConfig};
//!
//! let config = SessionConfig::from_env(&Environment::current())?;
//! let token_service = TokenService::from_config(&config)?;
//! ```

use std::env;
use std::fmt;

use chrono::Duration;

use crate::config::Environment;
use crate::errors::{AppError, AppResult};

/// 개발 환경에서만 허용되는 기본 서명 비밀키
const DEV_FALLBACK_SECRET: &str = "your-secret-key";

/// 기본 토큰 유효 기간 (일)
pub const DEFAULT_TOKEN_VALIDITY_DAYS: i64 = 7;
pub const MAX_TOKEN_VALIDITY_DAYS: i64 = 365;

/// bcrypt가 허용하는 cost 범위
pub const MIN_SALT_ROUNDS: u32 = 4;
pub const MAX_SALT_ROUNDS: u32 = 31;

/// 세션 토큰 서명/만료 설정
///
/// `Debug` 출력에서 비밀키는 가려집니다.
#[derive(Clone)]
pub struct SessionConfig {
    jwt_secret: String,
    salt_rounds: u32,
    token_validity_days: i64,
}

impl SessionConfig {
    /// 값을 직접 지정하여 설정을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 빈 비밀키 또는 범위를 벗어난 cost/유효 기간
    pub fn new(
        jwt_secret: impl Into<String>,
        salt_rounds: u32,
        token_validity_days: i64,
    ) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();

        if jwt_secret.is_empty() {
            return Err(AppError::ConfigError("JWT_SECRET must not be empty".to_string()));
        }

        if !(MIN_SALT_ROUNDS..=MAX_SALT_ROUNDS).contains(&salt_rounds) {
            return Err(AppError::ConfigError(format!(
                "SALT_ROUNDS must be between {} and {}, got {}",
                MIN_SALT_ROUNDS, MAX_SALT_ROUNDS, salt_rounds
            )));
        }

        if !(1..=MAX_TOKEN_VALIDITY_DAYS).contains(&token_validity_days) {
            return Err(AppError::ConfigError(format!(
                "TOKEN_VALIDITY_DAYS must be between 1 and {}, got {}",
                MAX_TOKEN_VALIDITY_DAYS, token_validity_days
            )));
        }

        Ok(Self {
            jwt_secret,
            salt_rounds,
            token_validity_days,
        })
    }

    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env(environment: &Environment) -> AppResult<Self> {
        Self::from_lookup(environment, |key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 읽습니다.
    ///
    /// # 기본값
    ///
    /// - `JWT_SECRET`: 프로덕션에서는 필수, 그 외 환경에서는 경고 후 개발용 키 사용
    /// - `SALT_ROUNDS`: [`Environment::default_salt_rounds`]
    /// - `TOKEN_VALIDITY_DAYS`: 7
    pub fn from_lookup<F>(environment: &Environment, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if environment.is_production() => {
                return Err(AppError::ConfigError(
                    "JWT_SECRET must be set in production".to_string(),
                ));
            }
            None => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEV_FALLBACK_SECRET.to_string()
            }
        };

        let salt_rounds = match lookup("SALT_ROUNDS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                AppError::ConfigError(format!("SALT_ROUNDS 파싱 실패 '{}': {}", raw, e))
            })?,
            None => environment.default_salt_rounds(),
        };

        let token_validity_days = match lookup("TOKEN_VALIDITY_DAYS") {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| {
                AppError::ConfigError(format!("TOKEN_VALIDITY_DAYS 파싱 실패 '{}': {}", raw, e))
            })?,
            None => DEFAULT_TOKEN_VALIDITY_DAYS,
        };

        Self::new(jwt_secret, salt_rounds, token_validity_days)
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// 비밀키 파생에 사용할 bcrypt cost
    pub fn salt_rounds(&self) -> u32 {
        self.salt_rounds
    }

    /// 액세스/리프레시 토큰 공통 유효 기간
    pub fn token_validity(&self) -> Duration {
        Duration::days(self.token_validity_days)
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("jwt_secret", &"<redacted>")
            .field("salt_rounds", &self.salt_rounds)
            .field("token_validity_days", &self.token_validity_days)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_outside_production() {
        let config = SessionConfig::from_lookup(&Environment::Development, |_| None).unwrap();

        assert_eq!(config.jwt_secret(), DEV_FALLBACK_SECRET);
        assert_eq!(config.salt_rounds(), 4);
        assert_eq!(config.token_validity(), Duration::days(7));
    }

    #[test]
    fn test_production_requires_secret() {
        let result = SessionConfig::from_lookup(&Environment::Production, |_| None);
        assert!(matches!(result, Err(AppError::ConfigError(_))));

        let result =
            SessionConfig::from_lookup(&Environment::Production, lookup_from(&[("JWT_SECRET", "")]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config = SessionConfig::from_lookup(
            &Environment::Production,
            lookup_from(&[
                ("JWT_SECRET", "prod-secret"),
                ("SALT_ROUNDS", "10"),
                ("TOKEN_VALIDITY_DAYS", "3"),
            ]),
        )
        .unwrap();

        assert_eq!(config.jwt_secret(), "prod-secret");
        assert_eq!(config.salt_rounds(), 10);
        assert_eq!(config.token_validity(), Duration::days(3));
    }

    #[test]
    fn test_rejects_out_of_range_salt_rounds() {
        assert!(SessionConfig::new("secret", 3, 7).is_err());
        assert!(SessionConfig::new("secret", 32, 7).is_err());
        assert!(SessionConfig::new("secret", 4, 7).is_ok());
    }

    #[test]
    fn test_rejects_unparsable_values() {
        let result = SessionConfig::from_lookup(
            &Environment::Test,
            lookup_from(&[("SALT_ROUNDS", "twelve")]),
        );
        assert!(matches!(result, Err(AppError::ConfigError(_))));

        let result = SessionConfig::from_lookup(
            &Environment::Test,
            lookup_from(&[("TOKEN_VALIDITY_DAYS", "0")]),
        );
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = SessionConfig::new("super-secret", 4, 7).unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
