use crate::dashboard::RepositoryDashboard;
use crate::error::{DashboardError, Result};
use crate::forms::{LoginForm, PasswordResetForm, SignUpForm};
use crate::github::GitHubClient;
use crate::identity::IdentityClient;
use crate::models::{
    DashboardQuery, DashboardResponse, PasswordResetResponse, RepoView, SessionResponse,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Liveness probe response (minimal, just indicates the process is running)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Shared application state for all routes
#[derive(Clone)]
pub struct AppState {
    pub github: Arc<GitHubClient>,
    pub identity: Arc<IdentityClient>,
    pub start_time: std::time::Instant,
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/livez", get(liveness_check))
        .route("/auth/signup", post(sign_up))
        .route("/auth/login", post(log_in))
        .route("/auth/password-reset", post(password_reset))
        .route("/users/:username/repos", get(user_repos))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the HTTP server and serve until the shutdown future resolves.
pub async fn start_server(
    app_state: AppState,
    port: u16,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let app = build_router(app_state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Dashboard server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now(),
    };

    (StatusCode::OK, Json(response))
}

async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            status: "alive".to_string(),
        }),
    )
}

/// Create an account with the identity provider. Form rules are checked
/// before any network call is made.
async fn sign_up(
    State(state): State<AppState>,
    Json(form): Json<SignUpForm>,
) -> Result<Json<SessionResponse>> {
    form.validate()?;

    let session = state.identity.sign_up(&form.email, &form.password).await?;
    info!(email = %form.email, "account created");

    Ok(Json(session.into()))
}

async fn log_in(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<SessionResponse>> {
    form.validate()?;

    let session = state.identity.sign_in(&form.email, &form.password).await?;
    info!(email = %form.email, "signed in");

    Ok(Json(session.into()))
}

async fn password_reset(
    State(state): State<AppState>,
    Json(form): Json<PasswordResetForm>,
) -> Result<Json<PasswordResetResponse>> {
    form.validate()?;

    state.identity.send_password_reset(&form.email).await?;

    Ok(Json(PasswordResetResponse {
        email: form.email,
        sent: true,
    }))
}

/// The dashboard query: fetch every page of the user's repositories, derive
/// the language list, filter, and return one page of results.
async fn user_repos(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>> {
    let repos = state
        .github
        .fetch_all_repositories(&username)
        .await
        .map_err(|err| match err {
            DashboardError::NotFound(_) => {
                DashboardError::NotFound("user not found or request error".to_string())
            }
            other => other,
        })?;

    let dashboard = RepositoryDashboard::new(repos);
    let languages = dashboard.languages();
    let page = dashboard.page(query.language_filter(), query.page.unwrap_or(1));

    Ok(Json(DashboardResponse {
        username,
        total_count: dashboard.total_count(),
        filtered_count: page.filtered_count,
        page: page.page,
        page_count: page.page_count,
        languages,
        repositories: page.records.into_iter().map(RepoView::from).collect(),
    }))
}
