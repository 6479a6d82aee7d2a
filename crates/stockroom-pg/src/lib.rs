//! PostgreSQL integration for stockroom.
//!
//! Low-level database connectivity and table metadata. Every statement the
//! application issues is parameterized; this crate only knows how to open
//! the shared connection and how each table is declared.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from `DB_URL`
//! - [`ensure()`] — Applies a table's DDL at startup
//!
//! ## Table Names
//!
//! Constants for all persistent entities: roles, users, and the catalog
//! tables (categories, brands, suppliers, products).
mod schema;

pub use schema::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// Connects to PostgreSQL using the `DB_URL` environment variable.
/// Returns an `Arc<Client>` suitable for sharing across async tasks.
///
/// # Panics
///
/// Panics if `DB_URL` is not set or if connection fails.
pub async fn db() -> Arc<Client> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").expect("DB_URL must be set");
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .expect("database connection failed");
    tokio::spawn(connection);
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await
        .expect("set client_min_messages");
    Arc::new(client)
}

/// Applies a table's `CREATE TABLE` and index DDL if not already present.
pub async fn ensure<S: Schema>(client: &Client) -> Result<(), PgErr> {
    client.batch_execute(S::creates()).await?;
    client.batch_execute(S::indices()).await
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for access roles.
#[rustfmt::skip]
pub const ROLES:      &str = "roles";
/// Table for registered user accounts.
#[rustfmt::skip]
pub const USERS:      &str = "users";
/// Table for product categories.
#[rustfmt::skip]
pub const CATEGORIES: &str = "categories";
/// Table for product brands.
#[rustfmt::skip]
pub const BRANDS:     &str = "brands";
/// Table for suppliers.
#[rustfmt::skip]
pub const SUPPLIERS:  &str = "suppliers";
/// Table for inventory products.
#[rustfmt::skip]
pub const PRODUCTS:   &str = "products";
