use super::*;
use stockroom_core::ID;
use stockroom_core::Unique;
use stockroom_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Repository trait for credential and role database operations.
/// Abstracts SQL from domain modules; every statement is parameterized.
#[allow(async_fn_in_trait)]
pub trait CredentialRepository {
    /// Case-sensitive exact-match lookup, returning the credential and
    /// its stored hash.
    async fn lookup(&self, username: &str) -> Result<Option<(Credential, String)>, PgErr>;
    async fn exists(&self, username: &str, email: &str) -> Result<bool, PgErr>;
    async fn create(&self, credential: &Credential, hashword: &str) -> Result<(), PgErr>;
    async fn users(&self) -> Result<Vec<Credential>, PgErr>;
    async fn update(&self, id: ID<Credential>, changes: &UpdateUserRequest) -> Result<bool, PgErr>;
    async fn remove(&self, id: ID<Credential>) -> Result<bool, PgErr>;
    async fn roles(&self) -> Result<Vec<Role>, PgErr>;
    async fn create_role(&self, role: &Role) -> Result<(), PgErr>;
    async fn update_role(&self, id: ID<Role>, changes: &RoleRequest) -> Result<bool, PgErr>;
}

fn credential(row: &tokio_postgres::Row) -> Credential {
    Credential::new(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        row.get::<_, String>(1),
        row.get::<_, String>(2),
        row.get::<_, String>(3),
        ID::from(row.get::<_, uuid::Uuid>(4)),
    )
    .with_active(row.get::<_, bool>(5))
}

impl CredentialRepository for Arc<Client> {
    async fn lookup(&self, username: &str) -> Result<Option<(Credential, String)>, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT id, username, email, display_name, role_id, active, hashword FROM ",
                USERS,
                " WHERE username = $1"
            ),
            &[&username],
        )
        .await
        .map(|opt| opt.map(|row| (credential(&row), row.get::<_, String>(6))))
    }

    async fn exists(&self, username: &str, email: &str) -> Result<bool, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT 1 FROM ",
                USERS,
                " WHERE username = $1 OR email = $2"
            ),
            &[&username, &email],
        )
        .await
        .map(|opt| opt.is_some())
    }

    async fn create(&self, credential: &Credential, hashword: &str) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                USERS,
                " (id, username, email, display_name, hashword, role_id) VALUES ($1, $2, $3, $4, $5, $6)"
            ),
            &[
                &credential.id().inner(),
                &credential.username(),
                &credential.email(),
                &credential.display_name(),
                &hashword,
                &credential.role().inner(),
            ],
        )
        .await
        .map(|_| ())
    }

    async fn users(&self) -> Result<Vec<Credential>, PgErr> {
        self.query(
            const_format::concatcp!(
                "SELECT id, username, email, display_name, role_id, active FROM ",
                USERS,
                " ORDER BY username"
            ),
            &[],
        )
        .await
        .map(|rows| rows.iter().map(credential).collect())
    }

    async fn update(&self, id: ID<Credential>, changes: &UpdateUserRequest) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!(
                "UPDATE ",
                USERS,
                " SET username = $1, email = $2, display_name = $3, role_id = $4, active = $5 WHERE id = $6"
            ),
            &[
                &changes.username,
                &changes.email,
                &changes.display_name,
                &changes.role,
                &changes.active,
                &id.inner(),
            ],
        )
        .await
        .map(|n| n > 0)
    }

    async fn remove(&self, id: ID<Credential>) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!("DELETE FROM ", USERS, " WHERE id = $1"),
            &[&id.inner()],
        )
        .await
        .map(|n| n > 0)
    }

    async fn roles(&self) -> Result<Vec<Role>, PgErr> {
        self.query(
            const_format::concatcp!(
                "SELECT id, name, description FROM ",
                ROLES,
                " ORDER BY name"
            ),
            &[],
        )
        .await
        .map(|rows| {
            rows.iter()
                .map(|row| {
                    Role::new(
                        ID::from(row.get::<_, uuid::Uuid>(0)),
                        row.get::<_, String>(1),
                        row.get::<_, Option<String>>(2),
                    )
                })
                .collect()
        })
    }

    async fn create_role(&self, role: &Role) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                ROLES,
                " (id, name, description) VALUES ($1, $2, $3)"
            ),
            &[&role.id().inner(), &role.name(), &role.description()],
        )
        .await
        .map(|_| ())
    }

    async fn update_role(&self, id: ID<Role>, changes: &RoleRequest) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!(
                "UPDATE ",
                ROLES,
                " SET name = $1, description = $2 WHERE id = $3"
            ),
            &[&changes.name, &changes.description, &id.inner()],
        )
        .await
        .map(|n| n > 0)
    }
}
