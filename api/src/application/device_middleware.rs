use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};

/// Header carrying the client's stable device identity.
pub const DEVICE_ID_HEADER: &str = "x-device-id";

/// Device identity for per-screen session state. Each client instance sends
/// a stable `X-Device-Id`; screens and the theme preference are keyed by it.
#[derive(Clone, Debug)]
pub struct DeviceContext {
    pub device_id: String,
}

/// Requires the `X-Device-Id` header and stores a [`DeviceContext`] in the
/// request extensions. Without it, per-device screen state would silently
/// merge unrelated clients, so a missing header is a client error.
pub async fn device_middleware(mut req: Request, next: Next) -> Result<Response, StatusCode> {
    let device_id = req
        .headers()
        .get(DEVICE_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(StatusCode::BAD_REQUEST)?;

    req.extensions_mut().insert(DeviceContext { device_id });

    Ok(next.run(req).await)
}
