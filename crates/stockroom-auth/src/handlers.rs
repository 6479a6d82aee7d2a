use super::*;
use stockroom_core::ID;
use stockroom_core::Unique;
use actix_web::HttpResponse;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

/// Exchanges credentials for a signed session token.
///
/// Empty fields short-circuit before the store is consulted. Unknown
/// username and wrong password produce the same response.
pub async fn login(
    db: web::Data<Arc<Client>>,
    tokens: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, AuthError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    log::debug!("login attempt: {}", req.username);
    let found = db.lookup(&req.username).await.map_err(AuthError::internal)?;
    let credential = authenticate(found, &req.password).inspect_err(|_| {
        log::warn!("failed login for {}", req.username);
    })?;
    let claims = Claims::new(
        credential.id(),
        credential.role(),
        credential.username().to_string(),
    );
    let token = tokens.encode(&claims).map_err(AuthError::internal)?;
    log::info!("user {} logged in", credential.username());
    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        display_name: credential.display_name().to_string(),
    }))
}

/// Echoes the caller's authorization context.
pub async fn me(auth: Auth) -> Result<HttpResponse, AuthError> {
    Ok(HttpResponse::Ok().json(UserInfo {
        id: auth.user().to_string(),
        username: auth.claims().username().to_string(),
        role: auth.role().inner(),
    }))
}

pub async fn register(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AuthError> {
    if req.username.len() < 3 || req.username.len() > 32 {
        return Ok(HttpResponse::BadRequest().body("username must be 3-32 characters"));
    }
    if req.password.len() < 8 {
        return Ok(HttpResponse::BadRequest().body("password must be at least 8 characters"));
    }
    if req.email.is_empty() || req.display_name.is_empty() {
        return Ok(HttpResponse::BadRequest().body("email and display name are required"));
    }
    if db
        .exists(&req.username, &req.email)
        .await
        .map_err(AuthError::internal)?
    {
        return Ok(HttpResponse::Conflict().body("username or email already exists"));
    }
    let hashword = password::hash(&req.password).map_err(AuthError::internal)?;
    let credential = Credential::new(
        ID::default(),
        req.username.clone(),
        req.email.clone(),
        req.display_name.clone(),
        ID::from(req.role),
    );
    db.create(&credential, &hashword)
        .await
        .map_err(AuthError::internal)?;
    log::info!("registered user {}", credential.username());
    Ok(HttpResponse::Created().json(serde_json::json!({ "id": credential.id().to_string() })))
}

pub async fn users(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
) -> Result<HttpResponse, AuthError> {
    let rows: Vec<UserRow> = db
        .users()
        .await
        .map_err(AuthError::internal)?
        .into_iter()
        .map(|c| UserRow {
            id: c.id().inner(),
            username: c.username().to_string(),
            email: c.email().to_string(),
            display_name: c.display_name().to_string(),
            role: c.role().inner(),
            active: c.active(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(rows))
}

pub async fn update_user(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    path: web::Path<uuid::Uuid>,
    req: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AuthError> {
    if req.username.is_empty() || req.email.is_empty() || req.display_name.is_empty() {
        return Ok(HttpResponse::BadRequest().body("all fields are required"));
    }
    match db
        .update(ID::from(path.into_inner()), &req.into_inner())
        .await
        .map_err(AuthError::internal)?
    {
        true => Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "updated" }))),
        false => Ok(HttpResponse::NotFound().body("user not found")),
    }
}

pub async fn remove_user(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    path: web::Path<uuid::Uuid>,
) -> Result<HttpResponse, AuthError> {
    match db
        .remove(ID::from(path.into_inner()))
        .await
        .map_err(AuthError::internal)?
    {
        true => Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "deleted" }))),
        false => Ok(HttpResponse::NotFound().body("user not found")),
    }
}

pub async fn roles(_auth: Auth, db: web::Data<Arc<Client>>) -> Result<HttpResponse, AuthError> {
    let rows: Vec<RoleRow> = db
        .roles()
        .await
        .map_err(AuthError::internal)?
        .into_iter()
        .map(|r| RoleRow {
            id: r.id().inner(),
            name: r.name().to_string(),
            description: r.description().map(String::from),
        })
        .collect();
    Ok(HttpResponse::Ok().json(rows))
}

/// Role listing trimmed to id and name for selection controls.
pub async fn role_names(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
) -> Result<HttpResponse, AuthError> {
    let rows: Vec<RoleName> = db
        .roles()
        .await
        .map_err(AuthError::internal)?
        .into_iter()
        .map(|r| RoleName {
            id: r.id().inner(),
            name: r.name().to_string(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(rows))
}

pub async fn create_role(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    req: web::Json<RoleRequest>,
) -> Result<HttpResponse, AuthError> {
    if req.name.is_empty() {
        return Ok(HttpResponse::BadRequest().body("role name is required"));
    }
    let role = Role::new(ID::default(), req.name.clone(), req.description.clone());
    db.create_role(&role).await.map_err(AuthError::internal)?;
    Ok(HttpResponse::Created().json(serde_json::json!({ "id": role.id().to_string() })))
}

pub async fn update_role(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    path: web::Path<uuid::Uuid>,
    req: web::Json<RoleRequest>,
) -> Result<HttpResponse, AuthError> {
    if req.name.is_empty() {
        return Ok(HttpResponse::BadRequest().body("role name is required"));
    }
    match db
        .update_role(ID::from(path.into_inner()), &req.into_inner())
        .await
        .map_err(AuthError::internal)?
    {
        true => Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "updated" }))),
        false => Ok(HttpResponse::NotFound().body("role not found")),
    }
}
