use stockroom_core::ID;
use stockroom_core::Unique;
use stockroom_pg::*;

/// Product brand lookup entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Brand {
    id: ID<Self>,
    name: String,
    country: Option<String>,
}

impl Brand {
    pub fn new(id: ID<Self>, name: String, country: Option<String>) -> Self {
        Self { id, name, country }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Country of origin, when recorded.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

impl Unique for Brand {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Schema for Brand {
    fn name() -> &'static str {
        BRANDS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            BRANDS,
            " (
                id      UUID PRIMARY KEY,
                name    VARCHAR(64) UNIQUE NOT NULL,
                country VARCHAR(64)
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_brands_name ON ",
            BRANDS,
            " (name);"
        )
    }
}
