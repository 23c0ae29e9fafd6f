use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zad_api::application::http::server::http_server::{router, state};
use zad_api::args::Args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if args.log.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let state = state(Arc::new(args)).await?;
    let addr = SocketAddr::from(([0, 0, 0, 0], state.args.server.port));
    let router = router(state)?;

    info!("ZAD API listening on {addr}");
    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
