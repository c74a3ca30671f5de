use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::render::MessageRenderer;

/// Build the single-route router serving the rendered message.
///
/// The route accepts any method at `/` and ignores the request body. All
/// descriptor and template state lives behind an immutable `Arc`, so
/// concurrent requests need no synchronization.
pub fn app(renderer: MessageRenderer) -> Router {
    Router::new()
        .route("/", any(serve_mock))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(renderer))
}

async fn serve_mock(State(renderer): State<Arc<MessageRenderer>>) -> Response {
    match renderer.render() {
        Ok(message) => {
            let content_type = format!(
                "application/x-protobuf; messageType=\"{}\"",
                message.type_name
            );
            ([(header::CONTENT_TYPE, content_type)], message.bytes).into_response()
        }
        Err(e) => {
            // Only reachable in per-request mode; the request fails, the
            // process keeps serving.
            error!("render failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Bind the listener and serve until the process exits.
pub async fn run(port: u16, renderer: MessageRenderer) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        message_type = renderer.message_type(),
        port, "starting mock responder"
    );
    let app = app(renderer);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
