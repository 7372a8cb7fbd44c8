use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
    Json,
};
use serde_json::json;

pub const API_TOKEN_ENV: &str = "GITGRADE_API_TOKEN";

pub async fn api_auth_middleware(
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    // Only enforced when GITGRADE_API_TOKEN is set
    if let Ok(expected_token) = std::env::var(API_TOKEN_ENV) {
        if !expected_token.is_empty() {
            let auth_header = request.headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok());

            match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
                Some(token) if token == expected_token => {}
                Some(_) => {
                    return Err((StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid API token"}))));
                }
                None => {
                    return Err((StatusCode::UNAUTHORIZED, Json(json!({"error": "Missing Authorization header"}))));
                }
            }
        }
    }

    Ok(next.run(request).await)
}
