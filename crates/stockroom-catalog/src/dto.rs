use super::*;
use stockroom_core::Unique;
use serde::Deserialize;
use serde::Serialize;

/// Create/update payload for products. Prices and stock levels default
/// to zero when omitted; references default to none.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<uuid::Uuid>,
    #[serde(default)]
    pub brand: Option<uuid::Uuid>,
    #[serde(default)]
    pub supplier: Option<uuid::Uuid>,
    #[serde(default)]
    pub purchase_price: f64,
    #[serde(default)]
    pub sale_price: f64,
    #[serde(default)]
    pub stock_minimum: i32,
    #[serde(default)]
    pub stock_current: i32,
    #[serde(default)]
    pub location: Option<String>,
}

/// Product listing row with lookup names resolved by the repository.
#[derive(Debug, Serialize)]
pub struct ProductListing {
    pub id: uuid::Uuid,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub brand: String,
    pub supplier: String,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub stock_minimum: i32,
    pub stock_current: i32,
    pub location: Option<String>,
    pub category_id: Option<uuid::Uuid>,
    pub brand_id: Option<uuid::Uuid>,
    pub supplier_id: Option<uuid::Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryRow {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<Category> for CategoryRow {
    fn from(category: Category) -> Self {
        Self {
            id: category.id().inner(),
            name: category.name().to_string(),
            description: category.description().map(String::from),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BrandRequest {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BrandRow {
    pub id: uuid::Uuid,
    pub name: String,
    pub country: Option<String>,
}

impl From<Brand> for BrandRow {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id().inner(),
            name: brand.name().to_string(),
            country: brand.country().map(String::from),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SupplierRequest {
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SupplierRow {
    pub id: uuid::Uuid,
    pub name: String,
    pub contact: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl From<Supplier> for SupplierRow {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id().inner(),
            name: supplier.name().to_string(),
            contact: supplier.contact().map(String::from),
            phone: supplier.phone().map(String::from),
            email: supplier.email().map(String::from),
            address: supplier.address().map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_request_defaults_numeric_fields() {
        let req: ProductRequest =
            serde_json::from_str(r#"{"sku": "SKU-1", "name": "Widget"}"#).unwrap();
        assert_eq!(req.purchase_price, 0.0);
        assert_eq!(req.sale_price, 0.0);
        assert_eq!(req.stock_minimum, 0);
        assert_eq!(req.stock_current, 0);
        assert!(req.category.is_none());
        assert!(req.location.is_none());
    }

    #[test]
    fn product_request_accepts_full_payload() {
        let req: ProductRequest = serde_json::from_str(
            r#"{
                "sku": "SKU-2",
                "name": "Gadget",
                "description": "A gadget",
                "category": "018f1e9a-0000-7000-8000-000000000001",
                "purchase_price": 9.5,
                "sale_price": 14.0,
                "stock_minimum": 2,
                "stock_current": 10,
                "location": "A-3"
            }"#,
        )
        .unwrap();
        assert_eq!(req.sale_price, 14.0);
        assert!(req.category.is_some());
        assert!(req.brand.is_none());
    }
}
