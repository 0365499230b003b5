//! HTTP inbound adapters - thin wrappers around the monitoring engine.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use anyhow::Context;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::domain::error::MonitoringError;
use crate::domain::models::LinkedActivityReport;
use crate::domain::services::MonitoringServiceImpl;
use crate::inbound::{auth, health, swagger};
use crate::outbound::{RecordbookGateway, RedisPortfolioCache, ReplicaPgStorage};
use models_minerals::UserContext;

/// The concrete engine this service wires together at startup.
pub type Monitoring =
    MonitoringServiceImpl<ReplicaPgStorage, RecordbookGateway, RedisPortfolioCache>;

#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<Config>,
    pub monitoring: Arc<Monitoring>,
}

// ===== Error Handling =====

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<MonitoringError> for HttpError {
    fn from(err: MonitoringError) -> Self {
        match err {
            MonitoringError::PortfolioUnavailable(e) => HttpError::ServiceUnavailable(e.to_string()),
            MonitoringError::Internal(e) => HttpError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match &self {
            HttpError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

// ===== Handlers =====

/// Link counts for every property in the caller's portfolio.
#[utoipa::path(
    get,
    tag = "monitoring service",
    path = "/monitoring/link_counts",
    responses(
        (status = 200, description = "Per-property link counts with read provenance", body = LinkedActivityReport),
        (status = 401, description = "Missing caller identity"),
        (status = 503, description = "Portfolio unavailable"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id = %user_context.user_id))]
pub async fn get_link_counts(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<LinkedActivityReport>, HttpError> {
    tracing::info!(
        organization_id = ?user_context.organization_id,
        "computing portfolio link counts"
    );

    let report = ctx.monitoring.linked_activity(&user_context).await?;

    tracing::info!(
        properties = report.counts.len(),
        sources = ?report.sources,
        "computed portfolio link counts"
    );

    Ok(Json(report))
}

// ===== Router =====

pub async fn setup_and_serve(state: ApiContext) -> anyhow::Result<()> {
    let port = state.config.port;
    let env = state.config.environment;

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .merge(health::router())
        .layer(CorsLayer::permissive())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let bind_address = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to address {}", bind_address))?;

    tracing::info!(
        "monitoring service is up and running with environment {:?} on port {}",
        &env,
        &port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error running axum server")
}

fn api_router(app_state: ApiContext) -> Router {
    Router::new()
        .nest(
            "/monitoring",
            monitoring_router().layer(axum::middleware::from_fn(auth::handler)),
        )
        .with_state(app_state)
}

fn monitoring_router() -> Router<ApiContext> {
    Router::new().route("/link_counts", get(get_link_counts))
}
