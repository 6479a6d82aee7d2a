//! Stockroom API server.
//!
//! Composes the auth endpoints and catalog CRUD into a single actix-web
//! application. Every route except `/health` and `/auth/login` is gated
//! by the bearer-token extractor.

pub mod catalog;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// Applies table DDL in dependency order.
async fn migrate(client: &Client) -> Result<(), stockroom_pg::PgErr> {
    stockroom_pg::ensure::<stockroom_auth::Role>(client).await?;
    stockroom_pg::ensure::<stockroom_auth::Credential>(client).await?;
    stockroom_pg::ensure::<stockroom_catalog::Category>(client).await?;
    stockroom_pg::ensure::<stockroom_catalog::Brand>(client).await?;
    stockroom_pg::ensure::<stockroom_catalog::Supplier>(client).await?;
    stockroom_pg::ensure::<stockroom_catalog::Product>(client).await?;
    Ok(())
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let client = stockroom_pg::db().await;
    migrate(&client).await.expect("apply database migrations");
    let crypto = web::Data::new(stockroom_auth::Crypto::from_env());
    let client = web::Data::new(client);
    log::info!("starting stockroom server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(crypto.clone())
            .app_data(client.clone())
            .route("/health", web::get().to(health))
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(stockroom_auth::login))
                    .route("/me", web::get().to(stockroom_auth::me)),
            )
            .service(
                web::scope("/users")
                    .route("/register", web::post().to(stockroom_auth::register))
                    .route("", web::get().to(stockroom_auth::users))
                    .route("/{id}", web::put().to(stockroom_auth::update_user))
                    .route("/{id}", web::delete().to(stockroom_auth::remove_user)),
            )
            .service(
                web::scope("/roles")
                    .route("", web::get().to(stockroom_auth::roles))
                    .route("/names", web::get().to(stockroom_auth::role_names))
                    .route("", web::post().to(stockroom_auth::create_role))
                    .route("/{id}", web::put().to(stockroom_auth::update_role)),
            )
            .service(
                web::scope("/products")
                    .route("", web::get().to(catalog::handlers::products))
                    .route("", web::post().to(catalog::handlers::create_product))
                    .route("/{id}", web::put().to(catalog::handlers::update_product)),
            )
            .service(
                web::scope("/categories")
                    .route("", web::get().to(catalog::handlers::categories))
                    .route("", web::post().to(catalog::handlers::create_category))
                    .route("/{id}", web::put().to(catalog::handlers::update_category))
                    .route("/{id}", web::delete().to(catalog::handlers::remove_category)),
            )
            .service(
                web::scope("/brands")
                    .route("", web::get().to(catalog::handlers::brands))
                    .route("", web::post().to(catalog::handlers::create_brand))
                    .route("/{id}", web::put().to(catalog::handlers::update_brand))
                    .route("/{id}", web::delete().to(catalog::handlers::remove_brand)),
            )
            .service(
                web::scope("/suppliers")
                    .route("", web::get().to(catalog::handlers::suppliers))
                    .route("", web::post().to(catalog::handlers::create_supplier))
                    .route("/{id}", web::put().to(catalog::handlers::update_supplier))
                    .route("/{id}", web::delete().to(catalog::handlers::remove_supplier)),
            )
    })
    .workers(4)
    .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
    .run()
    .await
}
