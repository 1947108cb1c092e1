use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use crate::presentation::state::AppState;

const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Heuristic client identifier used to bucket rate-limit state.
///
/// Prefers the first hop of `x-forwarded-for` when the deployment trusts its
/// reverse proxy, otherwise the socket peer address. Requests with neither
/// (in-process test calls) bucket under "unknown".
pub struct ClientKey(pub String);

impl FromRequestParts<AppState> for ClientKey {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.settings.server.trust_proxy {
            let forwarded = parts
                .headers
                .get(FORWARDED_FOR_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .filter(|v| !v.is_empty());

            if let Some(addr) = forwarded {
                return Ok(ClientKey(addr.to_string()));
            }
        }

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.ip().to_string());

        Ok(ClientKey(peer.unwrap_or_else(|| "unknown".to_string())))
    }
}
