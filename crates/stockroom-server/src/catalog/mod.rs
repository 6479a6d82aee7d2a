//! Catalog CRUD endpoints.

pub mod handlers;
