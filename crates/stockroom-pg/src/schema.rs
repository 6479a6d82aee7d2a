/// Schema metadata for PostgreSQL tables.
///
/// Describes table structure without performing any I/O. All methods return
/// `&'static str` so DDL can be assembled at compile time via
/// [`const_format::concatcp!`] in the implementing crates.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}
