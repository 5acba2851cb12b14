//! Token authentication for the delete endpoints

use std::collections::HashSet;
use std::sync::Arc;

use actix_web::{
    Error, HttpResponse,
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web,
};
use serde_json::json;

use crate::config::AuthConfig;

pub const NOT_AUTHENTICATED: &str = "Authentication credentials were not provided.";
pub const INVALID_TOKEN: &str = "Invalid token.";

const SCHEMES: [&str; 2] = ["Bearer", "Token"];

/// Why a request was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No `Authorization` header with a supported scheme
    NotProvided,
    /// Supported scheme, unknown or empty token
    InvalidToken,
}

impl AuthRejection {
    pub fn detail(self) -> &'static str {
        match self {
            Self::NotProvided => NOT_AUTHENTICATED,
            Self::InvalidToken => INVALID_TOKEN,
        }
    }
}

/// Checks `Authorization` headers against the configured static tokens.
#[derive(Debug, Clone)]
pub struct TokenAuthenticator {
    enabled: bool,
    tokens: Arc<HashSet<String>>,
}

impl TokenAuthenticator {
    pub fn from_config(config: &AuthConfig) -> Self {
        let tokens = config
            .tokens
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        Self {
            enabled: config.enabled,
            tokens: Arc::new(tokens),
        }
    }

    /// Let every request through.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            tokens: Arc::default(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Accepts `Bearer <token>` and `Token <token>`; the scheme is case-insensitive.
    pub fn authorize(&self, authorization: Option<&str>) -> Result<(), AuthRejection> {
        if !self.enabled {
            return Ok(());
        }
        let Some(header) = authorization.map(str::trim) else {
            return Err(AuthRejection::NotProvided);
        };
        let (scheme, token) = header.split_once(' ').unwrap_or((header, ""));
        if !SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)) {
            return Err(AuthRejection::NotProvided);
        }

        let token = token.trim();
        if !token.is_empty() && self.tokens.contains(token) {
            Ok(())
        } else {
            Err(AuthRejection::InvalidToken)
        }
    }
}

/// Middleware rejecting unauthenticated requests with 401.
pub async fn require_token<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let Some(auth) = req.app_data::<web::Data<TokenAuthenticator>>().cloned() else {
        return Err(actix_web::error::ErrorInternalServerError(
            "authenticator not configured",
        ));
    };

    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let rejection = match auth.authorize(authorization) {
        Ok(()) => return Ok(next.call(req).await?.map_into_left_body()),
        Err(rejection) => rejection,
    };

    tracing::warn!(path = %req.path(), ?rejection, "Rejected unauthenticated request");
    let response = HttpResponse::Unauthorized().json(json!({ "detail": rejection.detail() }));
    Ok(req.into_response(response).map_into_right_body())
}
