use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;

fn salt() -> SaltString {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes).expect("salt")
}

/// Hashes a password with a fresh random salt.
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt())
        .map(|h| h.to_string())
}

/// Verifies a password against a stored hash. An unparseable hash
/// verifies as false rather than erroring.
pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .ok()
        .as_ref()
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hashword = hash("secret123").unwrap();
        assert!(verify("secret123", &hashword));
    }

    #[test]
    fn wrong_password_fails() {
        let hashword = hash("secret123").unwrap();
        assert!(!verify("secret124", &hashword));
    }

    #[test]
    fn distinct_salts_per_hash() {
        let a = hash("secret123").unwrap();
        let b = hash("secret123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_hash_fails_closed() {
        assert!(!verify("secret123", "not-a-phc-string"));
    }
}
