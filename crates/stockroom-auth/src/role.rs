use stockroom_core::ID;
use stockroom_core::Unique;

/// Access role referenced by every credential.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role {
    id: ID<Self>,
    name: String,
    description: Option<String>,
}

impl Role {
    pub fn new(id: ID<Self>, name: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Unique for Role {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use stockroom_pg::*;

    impl Schema for Role {
        fn name() -> &'static str {
            ROLES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                ROLES,
                " (
                    id          UUID PRIMARY KEY,
                    name        VARCHAR(32) UNIQUE NOT NULL,
                    description TEXT
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_roles_name ON ",
                ROLES,
                " (name);"
            )
        }
    }
}
