use melivote::{config, routes};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let app = routes::app();
    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, bind = %config.bind_addr, "melivote listening");
    axum::serve(listener, app).await.expect("server failed");
}
