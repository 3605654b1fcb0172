use axum::{
    Router,
    routing::{delete, get, post},
};
use database::DbRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod response;

/// The shared application state that all handlers can access.
///
/// Constructed once at startup from an already-connected repository and
/// injected into every handler; there is no process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub repo: DbRepository,
}

/// Builds the full application router around the injected state.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/courses",
            get(handlers::courses::list)
                .post(handlers::courses::create)
                .put(handlers::courses::update),
        )
        .route("/api/courses/assignStaff", post(handlers::courses::assign_staff))
        .route(
            "/api/courses/:code",
            get(handlers::courses::get).delete(handlers::courses::remove),
        )
        .route(
            "/api/courses/:code/students",
            get(handlers::courses::enrolled_students),
        )
        .route(
            "/api/courses/:code/staff",
            get(handlers::courses::assigned_staff),
        )
        .route(
            "/api/students",
            get(handlers::students::list)
                .post(handlers::students::create)
                .put(handlers::students::update),
        )
        .route(
            "/api/students/:code",
            get(handlers::students::get).delete(handlers::students::remove),
        )
        .route(
            "/api/students/:code/courses",
            get(handlers::students::enrolled_courses),
        )
        .route("/api/students/:code/enroll", post(handlers::students::enroll))
        .route(
            "/api/students/:code/unenroll",
            delete(handlers::students::unenroll),
        )
        .route(
            "/api/staff",
            get(handlers::staff::list)
                .post(handlers::staff::create)
                .put(handlers::staff::update),
        )
        .route(
            "/api/staff/:code",
            get(handlers::staff::get).delete(handlers::staff::remove),
        )
        .route(
            "/api/staff/:code/courses",
            get(handlers::staff::assigned_courses),
        )
        .route("/api/statistics", get(handlers::statistics::get))
        .with_state(state)
        .layer(cors)
        // This middleware logs information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves the API until shutdown.
pub async fn run_server(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = app(state);

    tracing::info!("Web server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
