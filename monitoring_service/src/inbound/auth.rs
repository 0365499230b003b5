//! Caller-identity middleware.
//!
//! Session validation happens at the gateway; by the time a request reaches
//! this service the identity headers are trusted. Requests without them are
//! rejected rather than guessed at.

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use models_minerals::UserContext;

pub static USER_ID_HEADER: &str = "x-user-id";
pub static ORGANIZATION_ID_HEADER: &str = "x-organization-id";

pub async fn handler(mut request: Request, next: Next) -> Result<Response, StatusCode> {
    let user_id = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let organization_id = match request.headers().get(ORGANIZATION_ID_HEADER) {
        Some(value) => Some(
            value
                .to_str()
                .ok()
                .and_then(|raw| raw.parse::<i64>().ok())
                .ok_or(StatusCode::BAD_REQUEST)?,
        ),
        None => None,
    };

    request.extensions_mut().insert(UserContext {
        user_id,
        organization_id,
    });

    Ok(next.run(request).await)
}
