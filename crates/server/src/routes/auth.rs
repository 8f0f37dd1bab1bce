//! Session route handlers.
//!
//! The session is a single process-wide boolean flag: any client's login
//! flips it for everyone, logout clears it unconditionally, and nothing is
//! persisted across restarts. The credential list is re-read from disk on
//! every login attempt.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::services::AuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
}

/// Current value of the shared login flag.
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
}

/// Logout response.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Verify credentials and set the shared login flag.
///
/// POST /api/login
///
/// # Errors
///
/// Returns 401 if no credential matches, 500 if the user list cannot be
/// read or parsed.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    AuthService::new(&state.config().users_file)
        .verify(&request.username, &request.password)
        .await?;

    state.set_logged_in(true);
    tracing::info!(username = %request.username, "login succeeded");

    Ok(Json(LoginResponse {
        message: "login successful".to_owned(),
    }))
}

/// Report the current value of the shared login flag.
///
/// GET /api/isLoggedIn
pub async fn is_logged_in(State(state): State<AppState>) -> Json<SessionStatus> {
    Json(SessionStatus {
        is_logged_in: state.is_logged_in(),
    })
}

/// Clear the shared login flag, regardless of its prior value.
///
/// GET /api/logout
pub async fn logout(State(state): State<AppState>) -> Json<LogoutResponse> {
    state.set_logged_in(false);
    tracing::info!("logged out");

    Json(LogoutResponse { success: true })
}
