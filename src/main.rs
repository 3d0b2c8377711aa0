use std::net::{Ipv4Addr, SocketAddr};

use api::serve;
use repository::init_repository;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let database_url = util::database_url()?;
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let repository = init_repository(&database_url).await?;
    let router = serve(repository).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(&address).await?;
    info!(port, "content api listening");

    Ok(axum::serve(listener, router).await?)
}
