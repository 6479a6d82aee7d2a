use super::*;

/// Tokens lapse two hours after issuance; expired tokens require a
/// fresh login.
const TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(2 * 60 * 60);

/// JWT signing and verification over a server-held secret.
///
/// Constructed once at startup and injected into the request handlers;
/// there is no module-level secret.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
        }
    }
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| String::default())
                .as_bytes(),
        )
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &jsonwebtoken::Validation::default())
            .map(|data| data.claims)
    }
    pub const fn duration() -> std::time::Duration {
        TOKEN_DURATION
    }
}

/// Extracts the token from an `Authorization` header.
///
/// The header must be exactly two space-separated parts with the literal
/// `Bearer` scheme. A missing header is reported separately from a
/// malformed one.
pub fn bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::TokenRequired)?;
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MalformedToken),
    }
}

/// Verifies a bearer token end to end: header shape, signature, expiry.
///
/// Tampered and expired tokens yield the same error. On success the
/// embedded claims become the request's authorization context.
pub fn verify(tokens: &Crypto, header: Option<&str>) -> Result<Claims, AuthError> {
    let token = bearer(header)?;
    let claims = tokens
        .decode(token)
        .map_err(|_| AuthError::InvalidToken)?;
    if claims.expired() {
        return Err(AuthError::InvalidToken);
    }
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ID;

    fn crypto() -> Crypto {
        Crypto::new(b"test-secret-key-for-testing")
    }

    fn claims() -> Claims {
        Claims::new(ID::default(), ID::default(), "alice".to_string())
    }

    /// Replaces one character of the payload segment so the signature no
    /// longer matches the body.
    fn tamper(token: &str) -> String {
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let payload = &mut parts[1];
        let flipped = if payload.starts_with('A') { "B" } else { "A" };
        payload.replace_range(0..1, flipped);
        parts.join(".")
    }

    #[test]
    fn encode_decode_preserves_identity() {
        let issued = claims();
        let token = crypto().encode(&issued).unwrap();
        let decoded = crypto().decode(&token).unwrap();
        assert_eq!(decoded.sub, issued.sub);
        assert_eq!(decoded.usr, issued.usr);
        assert_eq!(decoded.rol, issued.rol);
    }

    #[test]
    fn tampered_payload_rejected() {
        let token = crypto().encode(&claims()).unwrap();
        assert!(crypto().decode(&tamper(&token)).is_err());
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = crypto().encode(&claims()).unwrap();
        assert!(Crypto::new(b"some-other-secret").decode(&token).is_err());
    }

    #[test]
    fn verify_roundtrip() {
        let issued = claims();
        let token = crypto().encode(&issued).unwrap();
        let header = format!("Bearer {}", token);
        let context = verify(&crypto(), Some(&header)).unwrap();
        assert_eq!(context.user(), issued.user());
        assert_eq!(context.role(), issued.role());
        assert_eq!(context.username(), issued.username());
    }

    #[test]
    fn verify_missing_header() {
        assert_eq!(verify(&crypto(), None), Err(AuthError::TokenRequired));
    }

    #[test]
    fn verify_malformed_header() {
        let crypto = crypto();
        assert_eq!(
            verify(&crypto, Some("Bearer")),
            Err(AuthError::MalformedToken)
        );
        assert_eq!(
            verify(&crypto, Some("Bearer ")),
            Err(AuthError::MalformedToken)
        );
        assert_eq!(
            verify(&crypto, Some("Token abc")),
            Err(AuthError::MalformedToken)
        );
        assert_eq!(
            verify(&crypto, Some("Bearer a b")),
            Err(AuthError::MalformedToken)
        );
    }

    #[test]
    fn verify_tampered_token() {
        let token = crypto().encode(&claims()).unwrap();
        let header = format!("Bearer {}", tamper(&token));
        assert_eq!(
            verify(&crypto(), Some(&header)),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn verify_long_expired_token() {
        let mut expired = claims();
        expired.exp = 1;
        let token = crypto().encode(&expired).unwrap();
        let header = format!("Bearer {}", token);
        assert_eq!(
            verify(&crypto(), Some(&header)),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn verify_freshly_expired_token() {
        // Within the decoder's leeway window; the explicit expiry check
        // must still reject it.
        let mut fresh = claims();
        fresh.exp = fresh.iat - 10;
        let token = crypto().encode(&fresh).unwrap();
        let header = format!("Bearer {}", token);
        assert_eq!(
            verify(&crypto(), Some(&header)),
            Err(AuthError::InvalidToken)
        );
    }
}
