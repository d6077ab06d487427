use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use spark_shared::errors::{AppError, ErrorCode};
use spark_shared::types::auth::Claims;

pub fn create_access_token(user_id: Uuid, secret: &str, ttl_secs: i64) -> Result<String, AppError> {
    let claims = Claims::new(user_id, ttl_secs);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(format!("JWT encoding failed: {e}")))
}

/// Checks signature and expiry only; there is no revocation list.
pub fn decode_access_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::new(ErrorCode::TokenExpired, "token has expired")
            }
            _ => AppError::new(ErrorCode::TokenInvalid, format!("invalid token: {e}")),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issue_then_decode_round_trip() {
        let user_id = Uuid::new_v4();
        let token = create_access_token(user_id, SECRET, 3600).unwrap();
        let claims = decode_access_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = create_access_token(Uuid::new_v4(), SECRET, 3600).unwrap();
        let err = decode_access_token(&token, "other-secret").unwrap_err();
        match err {
            AppError::Known { code, .. } => assert_eq!(code, ErrorCode::TokenInvalid),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_expired_token() {
        // Well past the default 60s validation leeway.
        let token = create_access_token(Uuid::new_v4(), SECRET, -3600).unwrap();
        let err = decode_access_token(&token, SECRET).unwrap_err();
        match err {
            AppError::Known { code, .. } => assert_eq!(code, ErrorCode::TokenExpired),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_tampered_token() {
        let token = create_access_token(Uuid::new_v4(), SECRET, 3600).unwrap();
        let mut tampered = token.clone();
        tampered.truncate(token.len() - 2);
        assert!(decode_access_token(&tampered, SECRET).is_err());
    }
}
