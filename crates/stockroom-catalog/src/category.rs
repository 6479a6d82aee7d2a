use stockroom_core::ID;
use stockroom_core::Unique;
use stockroom_pg::*;

/// Product category lookup entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    id: ID<Self>,
    name: String,
    description: Option<String>,
}

impl Category {
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

impl Unique for Category {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Schema for Category {
    fn name() -> &'static str {
        CATEGORIES
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            CATEGORIES,
            " (
                id          UUID PRIMARY KEY,
                name        VARCHAR(64) UNIQUE NOT NULL,
                description TEXT
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_categories_name ON ",
            CATEGORIES,
            " (name);"
        )
    }
}
