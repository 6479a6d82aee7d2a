use stockroom_auth::Auth;
use stockroom_catalog::*;
use stockroom_core::ID;
use stockroom_core::Unique;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

fn oops(fault: impl std::fmt::Display) -> HttpResponse {
    log::error!("catalog operation failed: {}", fault);
    HttpResponse::InternalServerError().body("internal server error")
}

pub async fn products(_auth: Auth, db: web::Data<Arc<Client>>) -> impl Responder {
    match db.products().await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => oops(e),
    }
}

pub async fn create_product(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    req: web::Json<ProductRequest>,
) -> impl Responder {
    if req.sku.is_empty() || req.name.is_empty() {
        return HttpResponse::BadRequest().body("sku and name are required");
    }
    let product = Product::new(
        ID::default(),
        req.sku.clone(),
        req.name.clone(),
        req.description.clone(),
        req.category.map(ID::from),
        req.brand.map(ID::from),
        req.supplier.map(ID::from),
        req.purchase_price,
        req.sale_price,
        req.stock_minimum,
        req.stock_current,
        req.location.clone(),
    );
    match db.create_product(&product).await {
        Ok(()) => HttpResponse::Created()
            .json(serde_json::json!({ "id": product.id().to_string() })),
        Err(e) => oops(e),
    }
}

pub async fn update_product(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    path: web::Path<uuid::Uuid>,
    req: web::Json<ProductRequest>,
) -> impl Responder {
    if req.sku.is_empty() || req.name.is_empty() {
        return HttpResponse::BadRequest().body("sku and name are required");
    }
    match db
        .update_product(ID::from(path.into_inner()), &req.into_inner())
        .await
    {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({ "status": "updated" })),
        Ok(false) => HttpResponse::NotFound().body("product not found"),
        Err(e) => oops(e),
    }
}

pub async fn categories(_auth: Auth, db: web::Data<Arc<Client>>) -> impl Responder {
    match db.categories().await {
        Ok(rows) => {
            HttpResponse::Ok().json(rows.into_iter().map(CategoryRow::from).collect::<Vec<_>>())
        }
        Err(e) => oops(e),
    }
}

pub async fn create_category(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    req: web::Json<CategoryRequest>,
) -> impl Responder {
    if req.name.is_empty() {
        return HttpResponse::BadRequest().body("category name is required");
    }
    let category = Category::new(ID::default(), req.name.clone(), req.description.clone());
    match db.create_category(&category).await {
        Ok(()) => HttpResponse::Created()
            .json(serde_json::json!({ "id": category.id().to_string() })),
        Err(e) => oops(e),
    }
}

pub async fn update_category(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    path: web::Path<uuid::Uuid>,
    req: web::Json<CategoryRequest>,
) -> impl Responder {
    match db
        .update_category(ID::from(path.into_inner()), &req.into_inner())
        .await
    {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({ "status": "updated" })),
        Ok(false) => HttpResponse::NotFound().body("category not found"),
        Err(e) => oops(e),
    }
}

pub async fn remove_category(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    match db.remove_category(ID::from(path.into_inner())).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({ "status": "deleted" })),
        Ok(false) => HttpResponse::NotFound().body("category not found"),
        Err(e) => oops(e),
    }
}

pub async fn brands(_auth: Auth, db: web::Data<Arc<Client>>) -> impl Responder {
    match db.brands().await {
        Ok(rows) => {
            HttpResponse::Ok().json(rows.into_iter().map(BrandRow::from).collect::<Vec<_>>())
        }
        Err(e) => oops(e),
    }
}

pub async fn create_brand(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    req: web::Json<BrandRequest>,
) -> impl Responder {
    if req.name.is_empty() {
        return HttpResponse::BadRequest().body("brand name is required");
    }
    let brand = Brand::new(ID::default(), req.name.clone(), req.country.clone());
    match db.create_brand(&brand).await {
        Ok(()) => {
            HttpResponse::Created().json(serde_json::json!({ "id": brand.id().to_string() }))
        }
        Err(e) => oops(e),
    }
}

pub async fn update_brand(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    path: web::Path<uuid::Uuid>,
    req: web::Json<BrandRequest>,
) -> impl Responder {
    match db
        .update_brand(ID::from(path.into_inner()), &req.into_inner())
        .await
    {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({ "status": "updated" })),
        Ok(false) => HttpResponse::NotFound().body("brand not found"),
        Err(e) => oops(e),
    }
}

pub async fn remove_brand(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    match db.remove_brand(ID::from(path.into_inner())).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({ "status": "deleted" })),
        Ok(false) => HttpResponse::NotFound().body("brand not found"),
        Err(e) => oops(e),
    }
}

pub async fn suppliers(_auth: Auth, db: web::Data<Arc<Client>>) -> impl Responder {
    match db.suppliers().await {
        Ok(rows) => {
            HttpResponse::Ok().json(rows.into_iter().map(SupplierRow::from).collect::<Vec<_>>())
        }
        Err(e) => oops(e),
    }
}

pub async fn create_supplier(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    req: web::Json<SupplierRequest>,
) -> impl Responder {
    if req.name.is_empty() {
        return HttpResponse::BadRequest().body("supplier name is required");
    }
    let supplier = Supplier::new(
        ID::default(),
        req.name.clone(),
        req.contact.clone(),
        req.phone.clone(),
        req.email.clone(),
        req.address.clone(),
    );
    match db.create_supplier(&supplier).await {
        Ok(()) => HttpResponse::Created()
            .json(serde_json::json!({ "id": supplier.id().to_string() })),
        Err(e) => oops(e),
    }
}

pub async fn update_supplier(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    path: web::Path<uuid::Uuid>,
    req: web::Json<SupplierRequest>,
) -> impl Responder {
    match db
        .update_supplier(ID::from(path.into_inner()), &req.into_inner())
        .await
    {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({ "status": "updated" })),
        Ok(false) => HttpResponse::NotFound().body("supplier not found"),
        Err(e) => oops(e),
    }
}

pub async fn remove_supplier(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    match db.remove_supplier(ID::from(path.into_inner())).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({ "status": "deleted" })),
        Ok(false) => HttpResponse::NotFound().body("supplier not found"),
        Err(e) => oops(e),
    }
}
