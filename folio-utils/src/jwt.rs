//! JSON Web Token (JWT) utilities for encoding and decoding tokens.
use jsonwebtoken::{
    decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header,
    TokenData, Validation,
};
use serde::{de::DeserializeOwned, Serialize};

#[inline]
pub fn encode_jwt<T: Serialize>(
    claims: &T,
    secret: &[u8],
    algorithm: Option<Algorithm>,
) -> Result<String, JwtError> {
    let header = Header::new(algorithm.unwrap_or(Algorithm::HS256));
    encode(&header, claims, &EncodingKey::from_secret(secret))
}

#[inline]
pub fn decode_jwt<T: DeserializeOwned>(
    token: &str,
    secret: &[u8],
    validation: Option<Validation>,
) -> Result<TokenData<T>, JwtError> {
    let validation = validation.unwrap_or_default();
    decode::<T>(token, &DecodingKey::from_secret(secret), &validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct TestClaims {
        sub: String,
        exp: i64,
    }

    fn far_future() -> i64 {
        4102444800 // 2100-01-01
    }

    #[test]
    fn test_jwt_round_trip() {
        let claims = TestClaims {
            sub: "42".to_string(),
            exp: far_future(),
        };
        let token = encode_jwt(&claims, b"secret", None).unwrap();
        let decoded = decode_jwt::<TestClaims>(&token, b"secret", None).unwrap();
        assert_eq!(decoded.claims.sub, "42");
    }

    #[test]
    fn test_jwt_rejects_wrong_secret() {
        let claims = TestClaims {
            sub: "42".to_string(),
            exp: far_future(),
        };
        let token = encode_jwt(&claims, b"secret", None).unwrap();
        assert!(decode_jwt::<TestClaims>(&token, b"other", None).is_err());
    }

    #[test]
    fn test_jwt_rejects_expired_token() {
        let claims = TestClaims {
            sub: "42".to_string(),
            exp: 0,
        };
        let token = encode_jwt(&claims, b"secret", None).unwrap();
        assert!(decode_jwt::<TestClaims>(&token, b"secret", None).is_err());
    }
}
