/// Client-facing authentication failures.
///
/// Unknown username and wrong password collapse into
/// [`AuthError::InvalidCredentials`]; a forged signature and a lapsed
/// expiry collapse into [`AuthError::InvalidToken`]. Callers cannot
/// distinguish the merged cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("token required")]
    TokenRequired,
    #[error("invalid token format")]
    MalformedToken,
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("internal server error")]
    Internal,
}

impl AuthError {
    /// Records the underlying fault in the server log and returns the
    /// generic 500-class error. The detail never reaches the client.
    pub fn internal<E: std::fmt::Display>(fault: E) -> Self {
        log::error!("internal auth failure: {}", fault);
        Self::Internal
    }
}

#[cfg(feature = "server")]
impl actix_web::ResponseError for AuthError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            Self::MissingCredentials => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::TokenRequired => StatusCode::FORBIDDEN,
            Self::MalformedToken => StatusCode::BAD_REQUEST,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "message": self.to_string() }))
    }
}
