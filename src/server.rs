use crate::graphql::GraphQLSchema;
use crate::observability::metrics;
use axum::{
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Extension, Router,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use hyper::Server;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Optional routes mounted next to /graphql and /health
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteOptions {
    pub graphiql: bool,
    pub metrics: bool,
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "blog-graphql",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GraphQL handler (supports GET and POST)
async fn graphql_handler(
    Extension(schema): Extension<GraphQLSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    metrics::record_graphql_request();
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL IDE endpoint
async fn graphiql() -> impl IntoResponse {
    Html(
        async_graphql::http::GraphiQLSource::build()
            .endpoint("/graphql")
            .finish(),
    )
}

/// Prometheus scrape endpoint
async fn metrics_handler() -> impl IntoResponse {
    match metrics::render() {
        Some(body) => (StatusCode::OK, body).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder not installed").into_response(),
    }
}

/// Create the HTTP router with all routes, including GraphQL
pub fn create_server(schema: GraphQLSchema, options: RouteOptions) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/health", get(health))
        .route("/graphql", get(graphql_handler).post(graphql_handler));

    if options.graphiql {
        router = router.route("/graphiql", get(graphiql));
    }
    if options.metrics {
        router = router.route("/metrics", get(metrics_handler));
    }

    router
        .layer(Extension(schema))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Serve `app` on `addr` until Ctrl-C
pub async fn start_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("HTTP server running on http://{addr}");
    info!("GraphQL: http://{addr}/graphql");

    Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Could not listen for Ctrl-C, graceful shutdown disabled: {e}");
            std::future::pending::<()>().await;
        }
    }
}
