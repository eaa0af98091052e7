use axum::{Router, http::StatusCode, response::Html};

pub const LIVENESS_BODY: &str = "Hello from Delta :>";

async fn liveness() -> (StatusCode, Html<&'static str>) {
    (StatusCode::OK, Html(LIVENESS_BODY))
}

fn router() -> Router {
    Router::new().fallback(liveness)
}

pub async fn run_with_listener(listener: tokio::net::TcpListener) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server is running on http://{}", addr);

    axum::serve(listener, router()).await
}

pub fn spawn_with_listener(
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
