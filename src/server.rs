//! Local preview server for the generated dataset
//!
//! Two read-only routes over the shared [`Session`]: `/` serves the preview
//! page and `/data` serves the dataset itself. The page pulls Chart.js from
//! the jsdelivr CDN, fetches `/data`, and renders both the chart and the raw
//! JSON.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::dataset::ChartData;
use crate::errors::{ChartGenError, Result};
use crate::session::Session;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Chart.js Data Preview</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
</head>
<body>
    <h1>Generated Chart Data Preview</h1>
    <div style="width: 80%; margin: auto;">
        <canvas id="myChart"></canvas>
    </div>
    <h2>Generated Data:</h2>
    <pre id="jsonData"></pre>

    <script>
        fetch('/data')
            .then(response => response.json())
            .then(data => {
                const ctx = document.getElementById('myChart').getContext('2d');
                new Chart(ctx, {
                    type: '{{chart_type}}',
                    data: data,
                    options: {
                        responsive: true,
                        plugins: {
                            title: {
                                display: true,
                                text: '{{chart_name}}'
                            }
                        }
                    }
                });
                document.getElementById('jsonData').textContent = JSON.stringify(data, null, 2);
            });
    </script>
</body>
</html>
"#;

/// Render the preview page for the session's chart kind
pub fn render_page(session: &Session) -> String {
    PAGE_TEMPLATE
        .replace("{{chart_type}}", session.kind().library_type())
        .replace("{{chart_name}}", session.kind().display_name())
}

/// Build the preview router over a shared session
pub fn router(session: Arc<Session>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/data", get(data))
        .layer(TraceLayer::new_for_http())
        .with_state(session)
}

async fn index(State(session): State<Arc<Session>>) -> Html<String> {
    Html(render_page(&session))
}

async fn data(State(session): State<Arc<Session>>) -> Json<ChartData> {
    Json(session.dataset().clone())
}

/// Serve the preview on `127.0.0.1:port` until Ctrl+C
pub async fn serve(session: Arc<Session>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ChartGenError::ServerStart { addr, source })?;
    tracing::info!("preview server listening on http://{addr}/");

    axum::serve(listener, router(session))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    confirm_interrupt(tokio::signal::ctrl_c().await).await;
}

/// Completes only when a Ctrl+C was actually delivered. Without a working
/// handler there is no shutdown trigger, so the server keeps serving.
async fn confirm_interrupt(ctrl_c: std::io::Result<()>) {
    if let Err(err) = ctrl_c {
        tracing::warn!("failed to install Ctrl+C handler: {err}");
        std::future::pending::<()>().await;
    }
}
