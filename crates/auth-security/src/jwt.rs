//! JWT token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token validation failed: {0}")]
    ValidationError(String),
    #[error("Token expired")]
    TokenExpired,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    pub fn new(secret: &str, access_expiry_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry: access_expiry_secs,
        }
    }

    /// Expiry this service stamps into issued tokens, in seconds.
    pub fn access_token_expiry(&self) -> i64 {
        self.access_token_expiry
    }

    pub fn issue(&self, subject: &Uuid) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::CreationError(e.to_string()))
    }

    /// Decode and verify a token: signature must match bit-for-bit and the
    /// embedded expiry is enforced with zero leeway. Any structural
    /// malformation is a validation error, never a panic.
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::ValidationError(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret", 1800)
    }

    #[test]
    fn test_issue_then_validate_round_trip() {
        let svc = service();
        let subject = Uuid::new_v4();
        let token = svc.issue(&subject).unwrap();
        let claims = svc.validate(&token).unwrap();
        assert_eq!(claims.sub, subject.to_string());
        assert_eq!(claims.exp, claims.iat + 1800);
    }

    #[test]
    fn test_expired_token_rejected() {
        let svc = JwtService::new("test-secret", -60);
        let token = svc.issue(&Uuid::new_v4()).unwrap();
        match svc.validate(&token) {
            Err(JwtError::TokenExpired) => {}
            other => panic!("expected TokenExpired, got {:?}", other),
        }
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let svc = service();
        let token = svc.issue(&Uuid::new_v4()).unwrap();
        let mut tampered = token[..token.len() - 1].to_string();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });
        assert!(matches!(
            svc.validate(&tampered),
            Err(JwtError::ValidationError(_))
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let svc = service();
        let token = svc.issue(&Uuid::new_v4()).unwrap();
        let other = JwtService::new("another-secret", 1800);
        assert!(matches!(
            other.validate(&token),
            Err(JwtError::ValidationError(_))
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let svc = service();
        for garbled in ["", "abc", "a.b", "a.b.c.d", "one.two.three"] {
            assert!(matches!(
                svc.validate(garbled),
                Err(JwtError::ValidationError(_))
            ));
        }
    }
}
