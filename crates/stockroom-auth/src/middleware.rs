use super::*;
use stockroom_core::ID;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use std::future::Ready;

/// Extractor gating protected routes.
///
/// Verification is stateless: signature and expiry are checked against
/// the injected [`Crypto`], no database is consulted, and the resulting
/// claims live only for the current request.
pub struct Auth(pub Claims);

impl Auth {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
    pub fn user(&self) -> ID<Credential> {
        self.0.user()
    }
    pub fn role(&self) -> ID<Role> {
        self.0.role()
    }
}

impl FromRequest for Auth {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok());
        std::future::ready(match req.app_data::<web::Data<Crypto>>() {
            Some(tokens) => verify(tokens, header).map(Auth),
            None => Err(AuthError::internal("token service not configured")),
        })
    }
}
