//! HTTP boundary — exposes the lookup service to the overlay script.
//!
//! - `GET /lookup?term=..&current=ID` — hover answer, dispatched on the
//!   configured mode (snippets or dictionary)
//! - `GET /define?term=..` — dictionary definition only
//! - `GET /healthz`
//!
//! Lookups are synchronous and fast, so handlers call the service inline.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use hoverdict_core::{LookupError, LookupService, RecordId, RecordStore};
use serde::Deserialize;
use tokio::net::TcpListener;

pub type SharedService<S> = Arc<LookupService<S>>;

#[derive(Debug, Deserialize)]
struct LookupParams {
    #[serde(default)]
    term: String,
    /// Note currently on screen; `0` when there is none.
    #[serde(default)]
    current: i64,
}

#[derive(Debug, Deserialize)]
struct DefineParams {
    #[serde(default)]
    term: String,
}

/// Maps [`LookupError`] onto a status code with a plain-text body.
struct ApiError(LookupError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            LookupError::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            LookupError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.0.to_string()).into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        ApiError(err)
    }
}

pub fn router<S>(service: SharedService<S>) -> Router
where
    S: RecordStore + 'static,
{
    Router::new()
        .route("/lookup", get(lookup::<S>))
        .route("/define", get(define::<S>))
        .route("/healthz", get(health))
        .with_state(service)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve<S>(service: SharedService<S>, addr: &str) -> anyhow::Result<()>
where
    S: RecordStore + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "lookup server listening");
    axum::serve(listener, router(service)).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn lookup<S: RecordStore>(
    State(service): State<SharedService<S>>,
    Query(params): Query<LookupParams>,
) -> Result<Html<String>, ApiError> {
    let html = service.respond(&params.term, RecordId(params.current))?;
    Ok(Html(html))
}

async fn define<S: RecordStore>(
    State(service): State<SharedService<S>>,
    Query(params): Query<DefineParams>,
) -> Result<Html<String>, ApiError> {
    Ok(Html(service.define(&params.term)?))
}

async fn health() -> &'static str {
    "ok"
}
