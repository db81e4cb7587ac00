//! 토큰 서명 비밀키 파생
//!
//! 정적 비밀키(`JWT_SECRET`)를 설정된 cost의 bcrypt로 해싱해 HMAC 서명 키를 만듭니다.
//! 솔트는 SHA-256(비밀키)의 앞 16바이트를 사용하므로 같은 비밀키와 cost는 항상 같은
//! 서명 키를 만듭니다. 파생은 프로세스 시작 시 한 번만 수행합니다.

use std::fmt;

use bcrypt::Version;
use jsonwebtoken::{DecodingKey, EncodingKey};
use sha2::{Digest, Sha256};

use crate::config::SessionConfig;
use crate::errors::{AppResult, ErrorContext};

/// 파생된 HMAC 서명 키
#[derive(Clone)]
pub struct SigningSecret {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    fingerprint: String,
}

impl SigningSecret {
    /// 정적 비밀키와 bcrypt cost로 서명 키를 파생합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt가 cost를 거부한 경우
    pub fn derive(secret: &str, cost: u32) -> AppResult<Self> {
        let digest = Sha256::digest(secret.as_bytes());

        let mut salt = [0u8; 16];
        salt.copy_from_slice(&digest[..16]);

        let derived = bcrypt::hash_with_salt(secret, cost, salt)
            .context("서명 비밀키 파생 실패")?
            .format_for_version(Version::TwoB);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(derived.as_bytes()),
            decoding_key: DecodingKey::from_secret(derived.as_bytes()),
            fingerprint: fingerprint(derived.as_bytes()),
        })
    }

    pub fn from_config(config: &SessionConfig) -> AppResult<Self> {
        Self::derive(config.jwt_secret(), config.salt_rounds())
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    /// 로그에 남겨도 되는 키 식별자 (SHA-256 앞 8바이트, 16진수)
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn fingerprint(key: &[u8]) -> String {
    Sha256::digest(key)[..8]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningSecret")
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}
