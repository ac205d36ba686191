//! Scheme and host of the incoming request, used to build short URLs.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, Uri, header, request::Parts};

use crate::error::AppError;
use crate::state::AppState;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Where the client reached us: `{scheme}://{host}`.
///
/// The host is taken verbatim from the `Host` header (port included), falling
/// back to the authority of an absolute-form request URI. The scheme is
/// `https` only when the request URI says so, or when the service runs behind a
/// trusted proxy that reports `X-Forwarded-Proto: https`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: &'static str,
    pub host: String,
}

impl RequestOrigin {
    /// Resolves the origin from request headers and URI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if no host is available or the `Host`
    /// header is not valid UTF-8.
    pub fn resolve(headers: &HeaderMap, uri: &Uri, behind_proxy: bool) -> Result<Self, AppError> {
        let host = match headers.get(header::HOST) {
            Some(value) => value
                .to_str()
                .map_err(|_| AppError::bad_request("Invalid Host header"))?
                .to_string(),
            None => uri
                .authority()
                .map(|authority| authority.as_str().to_string())
                .ok_or_else(|| AppError::bad_request("Missing Host header"))?,
        };

        let tls = uri.scheme_str() == Some("https")
            || (behind_proxy && forwarded_https(headers));

        Ok(Self {
            scheme: if tls { "https" } else { "http" },
            host,
        })
    }

    /// Absolute short URL for `index`.
    pub fn short_url(&self, index: i64) -> String {
        format!("{}://{}/{}", self.scheme, self.host, index)
    }
}

fn forwarded_https(headers: &HeaderMap) -> bool {
    headers
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"))
}

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::resolve(&parts.headers, &parts.uri, state.behind_proxy)
    }
}
