use super::*;
use stockroom_core::ID;

/// Signed token payload: who the bearer is and when the token lapses.
#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub usr: String,
    pub rol: uuid::Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: ID<Credential>, role: ID<Role>, username: String) -> Self {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_secs() as i64;
        Self {
            sub: user.inner(),
            usr: username,
            rol: role.inner(),
            iat: now,
            exp: now + Crypto::duration().as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp
            < std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time")
                .as_secs() as i64
    }
    pub fn user(&self) -> ID<Credential> {
        ID::from(self.sub)
    }
    pub fn role(&self) -> ID<Role> {
        ID::from(self.rol)
    }
    pub fn username(&self) -> &str {
        &self.usr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_claims_not_expired() {
        let claims = Claims::new(ID::default(), ID::default(), "alice".into());
        assert!(!claims.expired());
        assert_eq!(claims.exp - claims.iat, Crypto::duration().as_secs() as i64);
    }

    #[test]
    fn past_exp_is_expired() {
        let mut claims = Claims::new(ID::default(), ID::default(), "alice".into());
        claims.exp = claims.iat - 1;
        assert!(claims.expired());
    }

    #[test]
    fn claims_carry_identity() {
        let user = ID::default();
        let role = ID::default();
        let claims = Claims::new(user, role, "alice".into());
        assert_eq!(claims.user(), user);
        assert_eq!(claims.role(), role);
        assert_eq!(claims.username(), "alice");
    }
}
