use stockroom_core::ID;
use stockroom_core::Unique;
use stockroom_pg::*;

/// Supplier contact record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Supplier {
    id: ID<Self>,
    name: String,
    contact: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
}

impl Supplier {
    pub fn new(
        id: ID<Self>,
        name: String,
        contact: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            contact,
            phone,
            email,
            address,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

impl Unique for Supplier {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Schema for Supplier {
    fn name() -> &'static str {
        SUPPLIERS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            SUPPLIERS,
            " (
                id      UUID PRIMARY KEY,
                name    VARCHAR(128) UNIQUE NOT NULL,
                contact VARCHAR(128),
                phone   VARCHAR(32),
                email   VARCHAR(255),
                address TEXT
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_suppliers_name ON ",
            SUPPLIERS,
            " (name);"
        )
    }
}
