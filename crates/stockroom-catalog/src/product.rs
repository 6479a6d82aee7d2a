use super::*;
use stockroom_core::ID;
use stockroom_core::Unique;
use stockroom_pg::*;

/// Inventory product.
///
/// Category, brand, and supplier are optional references; listings
/// substitute placeholder names where they are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ID<Self>,
    sku: String,
    name: String,
    description: Option<String>,
    category: Option<ID<Category>>,
    brand: Option<ID<Brand>>,
    supplier: Option<ID<Supplier>>,
    purchase_price: f64,
    sale_price: f64,
    stock_minimum: i32,
    stock_current: i32,
    location: Option<String>,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ID<Self>,
        sku: String,
        name: String,
        description: Option<String>,
        category: Option<ID<Category>>,
        brand: Option<ID<Brand>>,
        supplier: Option<ID<Supplier>>,
        purchase_price: f64,
        sale_price: f64,
        stock_minimum: i32,
        stock_current: i32,
        location: Option<String>,
    ) -> Self {
        Self {
            id,
            sku,
            name,
            description,
            category,
            brand,
            supplier,
            purchase_price,
            sale_price,
            stock_minimum,
            stock_current,
            location,
        }
    }
    pub fn sku(&self) -> &str {
        &self.sku
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn category(&self) -> Option<ID<Category>> {
        self.category
    }
    pub fn brand(&self) -> Option<ID<Brand>> {
        self.brand
    }
    pub fn supplier(&self) -> Option<ID<Supplier>> {
        self.supplier
    }
    pub fn purchase_price(&self) -> f64 {
        self.purchase_price
    }
    pub fn sale_price(&self) -> f64 {
        self.sale_price
    }
    pub fn stock_minimum(&self) -> i32 {
        self.stock_minimum
    }
    pub fn stock_current(&self) -> i32 {
        self.stock_current
    }
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Unique for Product {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Schema for Product {
    fn name() -> &'static str {
        PRODUCTS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            PRODUCTS,
            " (
                id             UUID PRIMARY KEY,
                sku            VARCHAR(64) UNIQUE NOT NULL,
                name           VARCHAR(255) NOT NULL,
                description    TEXT,
                category_id    UUID REFERENCES ",
            CATEGORIES,
            "(id),
                brand_id       UUID REFERENCES ",
            BRANDS,
            "(id),
                supplier_id    UUID REFERENCES ",
            SUPPLIERS,
            "(id),
                purchase_price DOUBLE PRECISION NOT NULL DEFAULT 0,
                sale_price     DOUBLE PRECISION NOT NULL DEFAULT 0,
                stock_minimum  INTEGER NOT NULL DEFAULT 0,
                stock_current  INTEGER NOT NULL DEFAULT 0,
                location       VARCHAR(255)
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_products_sku ON ",
            PRODUCTS,
            " (sku);
             CREATE INDEX IF NOT EXISTS idx_products_category ON ",
            PRODUCTS,
            " (category_id);"
        )
    }
}
