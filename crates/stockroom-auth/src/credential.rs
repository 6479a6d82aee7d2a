use super::*;
use stockroom_core::ID;
use stockroom_core::Unique;

/// Stored identity record.
///
/// The password hash is not part of this type: repository lookups return
/// it alongside the credential, and nothing here is ever serialized with
/// it attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Credential {
    id: ID<Self>,
    username: String,
    email: String,
    display_name: String,
    role: ID<Role>,
    active: bool,
}

impl Credential {
    pub fn new(
        id: ID<Self>,
        username: String,
        email: String,
        display_name: String,
        role: ID<Role>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            display_name,
            role,
            active: true,
        }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
    pub fn role(&self) -> ID<Role> {
        self.role
    }
    pub fn active(&self) -> bool {
        self.active
    }
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl Unique for Credential {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

/// Resolves a login attempt against the repository lookup result.
///
/// Unknown username and wrong password collapse into the same error so
/// callers cannot enumerate accounts.
pub fn authenticate(
    found: Option<(Credential, String)>,
    password: &str,
) -> Result<Credential, AuthError> {
    match found {
        Some((credential, hashword)) if password::verify(password, &hashword) => Ok(credential),
        _ => Err(AuthError::InvalidCredentials),
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use stockroom_pg::*;

    /// Schema for the users table. The hashword column is database-only
    /// and never reaches the Credential domain type.
    impl Schema for Credential {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id           UUID PRIMARY KEY,
                    username     VARCHAR(32) UNIQUE NOT NULL,
                    email        VARCHAR(255) UNIQUE NOT NULL,
                    display_name VARCHAR(255) NOT NULL,
                    hashword     TEXT NOT NULL,
                    role_id      UUID NOT NULL REFERENCES ",
                ROLES,
                "(id),
                    active       BOOLEAN NOT NULL DEFAULT TRUE,
                    created_at   TIMESTAMPTZ NOT NULL DEFAULT now()
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_username ON ",
                USERS,
                " (username);
                 CREATE INDEX IF NOT EXISTS idx_users_role ON ",
                USERS,
                " (role_id);"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> (Credential, String) {
        let credential = Credential::new(
            ID::default(),
            "alice".to_string(),
            "alice@example.com".to_string(),
            "Alice Liddell".to_string(),
            ID::default(),
        );
        let hashword = password::hash("secret123").unwrap();
        (credential, hashword)
    }

    #[test]
    fn correct_password_authenticates() {
        let (credential, hashword) = alice();
        let resolved = authenticate(Some((credential.clone(), hashword)), "secret123").unwrap();
        assert_eq!(resolved, credential);
    }

    #[test]
    fn wrong_password_and_unknown_user_are_indistinguishable() {
        let (credential, hashword) = alice();
        let wrong = authenticate(Some((credential, hashword)), "wrong");
        let unknown = authenticate(None, "anything");
        assert_eq!(wrong, Err(AuthError::InvalidCredentials));
        assert_eq!(unknown, wrong);
    }
}
