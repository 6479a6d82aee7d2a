use super::*;
use stockroom_core::ID;
use stockroom_core::Unique;
use stockroom_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Listing name shown when a product has no category.
pub const NO_CATEGORY: &str = "Uncategorized";
/// Listing name shown when a product has no brand.
pub const NO_BRAND: &str = "Unbranded";
/// Listing name shown when a product has no supplier.
pub const NO_SUPPLIER: &str = "No supplier";

/// Repository trait for catalog database operations.
/// Update and delete report whether any row was touched.
#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    async fn products(&self) -> Result<Vec<ProductListing>, PgErr>;
    async fn create_product(&self, product: &Product) -> Result<(), PgErr>;
    async fn update_product(&self, id: ID<Product>, req: &ProductRequest) -> Result<bool, PgErr>;
    async fn categories(&self) -> Result<Vec<Category>, PgErr>;
    async fn create_category(&self, category: &Category) -> Result<(), PgErr>;
    async fn update_category(&self, id: ID<Category>, req: &CategoryRequest)
    -> Result<bool, PgErr>;
    async fn remove_category(&self, id: ID<Category>) -> Result<bool, PgErr>;
    async fn brands(&self) -> Result<Vec<Brand>, PgErr>;
    async fn create_brand(&self, brand: &Brand) -> Result<(), PgErr>;
    async fn update_brand(&self, id: ID<Brand>, req: &BrandRequest) -> Result<bool, PgErr>;
    async fn remove_brand(&self, id: ID<Brand>) -> Result<bool, PgErr>;
    async fn suppliers(&self) -> Result<Vec<Supplier>, PgErr>;
    async fn create_supplier(&self, supplier: &Supplier) -> Result<(), PgErr>;
    async fn update_supplier(&self, id: ID<Supplier>, req: &SupplierRequest)
    -> Result<bool, PgErr>;
    async fn remove_supplier(&self, id: ID<Supplier>) -> Result<bool, PgErr>;
}

impl CatalogRepository for Arc<Client> {
    async fn products(&self) -> Result<Vec<ProductListing>, PgErr> {
        self.query(
            const_format::concatcp!(
                "SELECT p.id, p.sku, p.name, p.description,
                        COALESCE(c.name, '",
                NO_CATEGORY,
                "') AS category,
                        COALESCE(b.name, '",
                NO_BRAND,
                "') AS brand,
                        COALESCE(s.name, '",
                NO_SUPPLIER,
                "') AS supplier,
                        p.purchase_price, p.sale_price, p.stock_minimum, p.stock_current,
                        p.location, p.category_id, p.brand_id, p.supplier_id
                 FROM ",
                PRODUCTS,
                " p
                 LEFT JOIN ",
                CATEGORIES,
                " c ON p.category_id = c.id
                 LEFT JOIN ",
                BRANDS,
                " b ON p.brand_id = b.id
                 LEFT JOIN ",
                SUPPLIERS,
                " s ON p.supplier_id = s.id
                 ORDER BY p.name"
            ),
            &[],
        )
        .await
        .map(|rows| {
            rows.iter()
                .map(|row| ProductListing {
                    id: row.get(0),
                    sku: row.get(1),
                    name: row.get(2),
                    description: row.get(3),
                    category: row.get(4),
                    brand: row.get(5),
                    supplier: row.get(6),
                    purchase_price: row.get(7),
                    sale_price: row.get(8),
                    stock_minimum: row.get(9),
                    stock_current: row.get(10),
                    location: row.get(11),
                    category_id: row.get(12),
                    brand_id: row.get(13),
                    supplier_id: row.get(14),
                })
                .collect()
        })
    }

    async fn create_product(&self, product: &Product) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                PRODUCTS,
                " (id, sku, name, description, category_id, brand_id, supplier_id,
                   purchase_price, sale_price, stock_minimum, stock_current, location)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)"
            ),
            &[
                &product.id().inner(),
                &product.sku(),
                &product.name(),
                &product.description(),
                &product.category().map(|id| id.inner()),
                &product.brand().map(|id| id.inner()),
                &product.supplier().map(|id| id.inner()),
                &product.purchase_price(),
                &product.sale_price(),
                &product.stock_minimum(),
                &product.stock_current(),
                &product.location(),
            ],
        )
        .await
        .map(|_| ())
    }

    async fn update_product(&self, id: ID<Product>, req: &ProductRequest) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!(
                "UPDATE ",
                PRODUCTS,
                " SET sku = $1, name = $2, description = $3, category_id = $4,
                      brand_id = $5, supplier_id = $6, purchase_price = $7,
                      sale_price = $8, stock_minimum = $9, stock_current = $10,
                      location = $11
                  WHERE id = $12"
            ),
            &[
                &req.sku,
                &req.name,
                &req.description,
                &req.category,
                &req.brand,
                &req.supplier,
                &req.purchase_price,
                &req.sale_price,
                &req.stock_minimum,
                &req.stock_current,
                &req.location,
                &id.inner(),
            ],
        )
        .await
        .map(|n| n > 0)
    }

    async fn categories(&self) -> Result<Vec<Category>, PgErr> {
        self.query(
            const_format::concatcp!(
                "SELECT id, name, description FROM ",
                CATEGORIES,
                " ORDER BY name"
            ),
            &[],
        )
        .await
        .map(|rows| {
            rows.iter()
                .map(|row| Category::new(ID::from(row.get::<_, uuid::Uuid>(0)), row.get(1), row.get(2)))
                .collect()
        })
    }

    async fn create_category(&self, category: &Category) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                CATEGORIES,
                " (id, name, description) VALUES ($1, $2, $3)"
            ),
            &[
                &category.id().inner(),
                &category.name(),
                &category.description(),
            ],
        )
        .await
        .map(|_| ())
    }

    async fn update_category(
        &self,
        id: ID<Category>,
        req: &CategoryRequest,
    ) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!(
                "UPDATE ",
                CATEGORIES,
                " SET name = $1, description = $2 WHERE id = $3"
            ),
            &[&req.name, &req.description, &id.inner()],
        )
        .await
        .map(|n| n > 0)
    }

    async fn remove_category(&self, id: ID<Category>) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!("DELETE FROM ", CATEGORIES, " WHERE id = $1"),
            &[&id.inner()],
        )
        .await
        .map(|n| n > 0)
    }

    async fn brands(&self) -> Result<Vec<Brand>, PgErr> {
        self.query(
            const_format::concatcp!("SELECT id, name, country FROM ", BRANDS, " ORDER BY name"),
            &[],
        )
        .await
        .map(|rows| {
            rows.iter()
                .map(|row| Brand::new(ID::from(row.get::<_, uuid::Uuid>(0)), row.get(1), row.get(2)))
                .collect()
        })
    }

    async fn create_brand(&self, brand: &Brand) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                BRANDS,
                " (id, name, country) VALUES ($1, $2, $3)"
            ),
            &[&brand.id().inner(), &brand.name(), &brand.country()],
        )
        .await
        .map(|_| ())
    }

    async fn update_brand(&self, id: ID<Brand>, req: &BrandRequest) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!(
                "UPDATE ",
                BRANDS,
                " SET name = $1, country = $2 WHERE id = $3"
            ),
            &[&req.name, &req.country, &id.inner()],
        )
        .await
        .map(|n| n > 0)
    }

    async fn remove_brand(&self, id: ID<Brand>) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!("DELETE FROM ", BRANDS, " WHERE id = $1"),
            &[&id.inner()],
        )
        .await
        .map(|n| n > 0)
    }

    async fn suppliers(&self) -> Result<Vec<Supplier>, PgErr> {
        self.query(
            const_format::concatcp!(
                "SELECT id, name, contact, phone, email, address FROM ",
                SUPPLIERS,
                " ORDER BY name"
            ),
            &[],
        )
        .await
        .map(|rows| {
            rows.iter()
                .map(|row| {
                    Supplier::new(
                        ID::from(row.get::<_, uuid::Uuid>(0)),
                        row.get(1),
                        row.get(2),
                        row.get(3),
                        row.get(4),
                        row.get(5),
                    )
                })
                .collect()
        })
    }

    async fn create_supplier(&self, supplier: &Supplier) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                SUPPLIERS,
                " (id, name, contact, phone, email, address) VALUES ($1, $2, $3, $4, $5, $6)"
            ),
            &[
                &supplier.id().inner(),
                &supplier.name(),
                &supplier.contact(),
                &supplier.phone(),
                &supplier.email(),
                &supplier.address(),
            ],
        )
        .await
        .map(|_| ())
    }

    async fn update_supplier(
        &self,
        id: ID<Supplier>,
        req: &SupplierRequest,
    ) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!(
                "UPDATE ",
                SUPPLIERS,
                " SET name = $1, contact = $2, phone = $3, email = $4, address = $5 WHERE id = $6"
            ),
            &[
                &req.name,
                &req.contact,
                &req.phone,
                &req.email,
                &req.address,
                &id.inner(),
            ],
        )
        .await
        .map(|n| n > 0)
    }

    async fn remove_supplier(&self, id: ID<Supplier>) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!("DELETE FROM ", SUPPLIERS, " WHERE id = $1"),
            &[&id.inner()],
        )
        .await
        .map(|n| n > 0)
    }
}
