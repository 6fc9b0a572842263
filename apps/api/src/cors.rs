//! Cross-origin policy.
//!
//! Browsers only honour CORS headers, so unknown origins are also turned away
//! server-side by `reject_unknown_origins` before any handler runs. Requests without
//! an `Origin` header (curl, server-to-server) are let through.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::errors::AppError;

/// Front-end origins accepted when `ALLOWED_ORIGINS` is not set.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://inspiring-pika-02f0fd.netlify.app",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

#[derive(Debug, Clone)]
pub struct OriginAllowList {
    origins: Arc<[String]>,
}

impl OriginAllowList {
    pub fn new(origins: &[String]) -> Self {
        Self {
            origins: origins.into(),
        }
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.origins.iter().any(|allowed| allowed == origin)
    }

    /// Response headers and preflight handling for the allowed origins.
    pub fn cors_layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    }
}

/// Middleware: 403 for any request whose `Origin` is not on the allow-list.
pub async fn reject_unknown_origins(
    State(allow_list): State<OriginAllowList>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        let origin = origin.to_str().unwrap_or_default();
        if !allow_list.allows(origin) {
            return Err(AppError::CorsRejection(origin.to_string()));
        }
    }
    Ok(next.run(request).await)
}
