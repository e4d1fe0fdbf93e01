use axum::Router;
use mockapetris_api::{create_api_routes, AppState};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn bind_web_server(bind_addr: &str) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind(bind_addr).await.map_err(|e| {
        anyhow::anyhow!("failed to bind control-plane server on {}: {}", bind_addr, e)
    })?;

    info!(bind_address = %bind_addr, "Control-plane server bound");
    Ok(listener)
}

pub async fn start_web_server(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);

    info!("Control-plane server started successfully");

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(state: AppState) -> Router {
    create_api_routes(state).layer(TraceLayer::new_for_http())
}
