use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use kernel::model::auth::{AccessToken, RefreshToken, TokenKind};
use kernel::model::id::UserId;
use serde::{Deserialize, Serialize};
use shared::config::AuthConfig;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
    kind: TokenKind,
    jti: String,
}

/// Issues and verifies the signed tokens that carry a user identity.
/// Verification is pure computation; there is no server-side session store.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

impl TokenService {
    pub fn new(cfg: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(cfg.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(cfg.token_secret.as_bytes()),
            access_token_ttl: Duration::minutes(cfg.access_token_ttl_minutes),
            refresh_token_ttl: Duration::days(cfg.refresh_token_ttl_days),
        }
    }

    pub fn issue_access_token(&self, user_id: UserId) -> AppResult<AccessToken> {
        self.issue(user_id, TokenKind::Access, self.access_token_ttl)
            .map(AccessToken)
    }

    pub fn issue_refresh_token(&self, user_id: UserId) -> AppResult<RefreshToken> {
        self.issue(user_id, TokenKind::Refresh, self.refresh_token_ttl)
            .map(RefreshToken)
    }

    /// Check signature, expiry and kind, and give back the embedded
    /// identity. Every failure mode collapses into `UnauthenticatedError`
    /// so the caller cannot distinguish a forged token from a stale one.
    pub fn verify(&self, token: &str, expected: TokenKind) -> AppResult<UserId> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::UnauthenticatedError)?;
        if data.claims.kind != expected {
            return Err(AppError::UnauthenticatedError);
        }

        Uuid::parse_str(&data.claims.sub)
            .map(UserId::from)
            .map_err(|_| AppError::UnauthenticatedError)
    }

    /// Mint a fresh access token for the identity inside a refresh token.
    /// The refresh token itself is left as-is: no rotation, no revocation.
    pub fn refresh(&self, refresh_token: &RefreshToken) -> AppResult<AccessToken> {
        let user_id = self.verify(&refresh_token.0, TokenKind::Refresh)?;
        self.issue_access_token(user_id)
    }

    fn issue(&self, user_id: UserId, kind: TokenKind, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            kind,
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(AppError::TokenCreationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            token_secret: "test-secret".into(),
            access_token_ttl_minutes: 45,
            refresh_token_ttl_days: 14,
        }
    }

    #[test]
    fn access_token_embeds_the_issued_identity() {
        let service = TokenService::new(&test_config());
        let user_id = UserId::new();

        let token = service.issue_access_token(user_id).unwrap();
        let verified = service.verify(&token.0, TokenKind::Access).unwrap();
        assert_eq!(verified, user_id);
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = TokenService::new(&test_config());
        assert!(service.verify("not-a-token", TokenKind::Access).is_err());
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let service = TokenService::new(&test_config());
        let other = TokenService::new(&AuthConfig {
            token_secret: "other-secret".into(),
            ..test_config()
        });

        let token = other.issue_access_token(UserId::new()).unwrap();
        let res = service.verify(&token.0, TokenKind::Access);
        assert!(matches!(res, Err(AppError::UnauthenticatedError)));
    }

    #[test]
    fn expired_access_token_is_rejected() {
        let service = TokenService::new(&AuthConfig {
            access_token_ttl_minutes: -5,
            ..test_config()
        });

        let token = service.issue_access_token(UserId::new()).unwrap();
        let res = service.verify(&token.0, TokenKind::Access);
        assert!(matches!(res, Err(AppError::UnauthenticatedError)));
    }

    #[test]
    fn refresh_token_cannot_stand_in_for_an_access_token() {
        let service = TokenService::new(&test_config());
        let user_id = UserId::new();

        let refresh = service.issue_refresh_token(user_id).unwrap();
        assert!(service.verify(&refresh.0, TokenKind::Access).is_err());
        assert!(service.verify(&refresh.0, TokenKind::Refresh).is_ok());
    }

    #[test]
    fn refresh_mints_a_usable_access_token_for_the_same_identity() {
        let service = TokenService::new(&test_config());
        let user_id = UserId::new();

        let refresh = service.issue_refresh_token(user_id).unwrap();
        let access = service.refresh(&refresh).unwrap();
        assert_eq!(service.verify(&access.0, TokenKind::Access).unwrap(), user_id);

        // No rotation: the same refresh token keeps working.
        let again = service.refresh(&refresh).unwrap();
        assert_eq!(service.verify(&again.0, TokenKind::Access).unwrap(), user_id);
    }
}
