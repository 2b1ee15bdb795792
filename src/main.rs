use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;

use pwned_check_rs::breach::PwnedPasswordsClient;
use pwned_check_rs::config::Config;
use pwned_check_rs::server::{self, AppState, Server};
use pwned_check_rs::strength::ZxcvbnEstimator;
use pwned_check_rs::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::parse();
    logging::init_logger(cfg.verbose);

    println!("pwned-check-rs configuration:");
    println!("  listen          : {}", cfg.bind_addr());
    println!("  breach api      : {}", cfg.breach_api_url);
    println!("  lookup timeout  : {} ms", cfg.lookup_timeout_ms);
    println!("  add padding     : {}", cfg.add_padding);
    println!("  ui dir          : {}", cfg.ui_dir.display());

    let breach = PwnedPasswordsClient::new(cfg.breach_api_url.clone(), cfg.lookup_timeout())?
        .with_padding(cfg.add_padding);
    let state = AppState::new(Arc::new(ZxcvbnEstimator), Arc::new(breach));
    let app = server::router(state, &cfg.ui_dir);

    let server = Server::bind(cfg.bind_addr(), app).await?;
    println!("Server is running on port {}", server.local_addr()?.port());

    let shutdown = CancellationToken::new();
    let shutdown_ctrlc = shutdown.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("shutdown requested");
        shutdown_ctrlc.cancel();
    });

    server.run(shutdown).await
}
