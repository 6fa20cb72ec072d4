use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::models::{User, UserRole};

/// Claims carried by issued bearer tokens: identity plus role, so route
/// guards never need a database round-trip.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

/// Service for issuing and verifying HS256 bearer tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: i64,
    leeway_secs: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_secs: config.token_ttl.as_secs() as i64,
            leeway_secs: config.jwt_leeway.as_secs(),
        }
    }

    /// Issue a token for the given account. Returns the token and its
    /// lifetime in seconds.
    pub fn issue(&self, user: &User) -> Result<(String, i64)> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            iat: now,
            exp: now + self.token_ttl_secs,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok((token, self.token_ttl_secs))
    }

    /// Verify a bearer token and convert its claims into an identity
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        let claims = token_data.claims;

        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(AuthenticatedUser {
            id,
            name: claims.name,
            email: claims.email,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::models::UserStatus;
    use std::time::Duration;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-key-for-unit-tests".to_string(),
            token_ttl: Duration::from_secs(7200),
            jwt_leeway: Duration::from_secs(60),
        }
    }

    fn test_user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Jamie".to_string(),
            email: "jamie@example.com".to_string(),
            password_hash: "irrelevant".to_string(),
            role,
            status: UserStatus::Active,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = TokenService::new(&test_config());
        let user = test_user(UserRole::Provider);

        let (token, expires_in) = service.issue(&user).unwrap();
        assert_eq!(expires_in, 7200);

        let identity = service.verify(&token).unwrap();
        assert_eq!(identity.id, user.id);
        assert_eq!(identity.email, user.email);
        assert_eq!(identity.role, UserRole::Provider);
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let service = TokenService::new(&test_config());
        let (token, _) = service.issue(&test_user(UserRole::Customer)).unwrap();

        let mut tampered = token.clone();
        tampered.truncate(token.len() - 2);
        assert!(matches!(
            service.verify(&tampered),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let service = TokenService::new(&test_config());
        let other = TokenService::new(&AuthConfig {
            jwt_secret: "a-completely-different-secret".to_string(),
            token_ttl: Duration::from_secs(7200),
            jwt_leeway: Duration::from_secs(60),
        });

        let (token, _) = other.issue(&test_user(UserRole::Customer)).unwrap();
        assert!(matches!(
            service.verify(&token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let config = test_config();
        let service = TokenService::new(&config);

        // Sign claims that expired an hour ago, well past the 60s leeway
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            name: "Jamie".to_string(),
            email: "jamie@example.com".to_string(),
            role: UserRole::Customer,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let service = TokenService::new(&test_config());
        assert!(matches!(
            service.verify("not-a-token"),
            Err(AppError::Unauthorized(_))
        ));
    }
}
