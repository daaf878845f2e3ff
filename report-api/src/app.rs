use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use telemetry::tracing::{MakeRequestId, SpanFactory};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    ServiceBuilderExt, catch_panic::CatchPanicLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{Level, info};

use crate::{
    app_state::AppState,
    catalog::ReportCatalog,
    config::Config,
    endpoints::{health, reports},
    error::{init::InitError, runtime::RuntimeError},
    utils::{
        catch_panic::PanicResponder, shutdown::wait_for_shutdown_signals,
    },
};

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// The top level app used to start the server.
/// The middleware stack is as follows:
/// 0. `SetRequestId`, assigning a v7 uuid unless `x-request-id` is present
/// 1. `Trace`
/// 2. `PropagateRequestId`, echoing the id on the response
/// 3. `Timeout`
/// 4. `CatchPanic`
/// 5. the report routes (`/reports/upload` with its own body limit)
#[derive(Clone)]
pub struct App {
    pub state: AppState,
    pub router: Router,
}

impl App {
    pub fn new(config: Config) -> Result<Self, InitError> {
        let catalog = match &config.catalog.path {
            Some(path) => ReportCatalog::from_path(path)?,
            None => ReportCatalog::builtin(),
        };
        Ok(Self::with_catalog(config, catalog))
    }

    #[must_use]
    pub fn with_catalog(config: Config, catalog: ReportCatalog) -> Self {
        tracing::debug!(
            templates = catalog.templates().len(),
            "creating app"
        );
        let state = AppState::new(config, catalog);
        let router = Self::router(state.clone());
        Self { state, router }
    }

    #[must_use]
    pub fn router(state: AppState) -> Router {
        let server = &state.config().server;
        let request_timeout: Duration = server.request_timeout;
        let upload_body_limit =
            server.max_upload_size.saturating_add(MULTIPART_OVERHEAD);
        Router::new()
            .route("/health", get(health::health))
            .route("/reports", get(reports::list_reports))
            .route(
                "/reports/upload",
                post(reports::upload_report)
                    .layer(DefaultBodyLimit::max(upload_body_limit)),
            )
            .route("/reports/parse-upload", post(reports::parse_upload))
            .route("/reports/{report_id}", get(reports::get_report))
            .route("/reports/{report_id}/parsed", get(reports::get_parsed))
            .route(
                "/reports/{report_id}/transactions",
                get(reports::get_transactions),
            )
            .route(
                "/reports/{report_id}/process",
                post(reports::trigger_processing),
            )
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .set_x_request_id(MakeRequestId)
                    .layer(
                        TraceLayer::new_for_http()
                            .make_span_with(SpanFactory)
                            .on_response(
                                tower_http::trace::DefaultOnResponse::new()
                                    .level(Level::INFO),
                            ),
                    )
                    .propagate_x_request_id()
                    .layer(TimeoutLayer::new(request_timeout))
                    .layer(CatchPanicLayer::custom(PanicResponder)),
            )
    }

    /// Binds the configured address and serves until a shutdown signal.
    pub async fn serve(self) -> Result<(), RuntimeError> {
        let address = self.state.config().server.socket_addr();
        let listener =
            TcpListener::bind(address)
                .await
                .map_err(|error| InitError::Bind {
                    address: address.to_string(),
                    error,
                })?;
        let local_addr = listener.local_addr().map_err(RuntimeError::Serve)?;
        info!(address = %local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown_signals())
            .await
            .map_err(RuntimeError::Serve)?;

        info!("server shut down");
        Ok(())
    }
}
