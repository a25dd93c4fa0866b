//! urlgraph server binary.
//!
//! Run with:
//!   RUST_LOG=debug cargo run
//!
//! Try:
//!   curl -X POST http://localhost:8080/graphql \
//!        -d '{"query": "{ urllist { name siteurl } }"}'
//!   curl -X POST http://localhost:8080/graphql \
//!        -d '{"query": "mutation { createUrl(name: \"youtube\", siteurl: \"youtube.com\") { name siteurl } }"}'

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use urlgraph::{Config, Server, UrlStore, api, schema};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let store = UrlStore::seeded();
    info!(records = store.len().await, path = %config.path, "store seeded");

    let app = api::app(schema::build_schema(store), &config.path);

    match Server::bind(config.addr).serve(app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("server error: {e}");
            ExitCode::FAILURE
        }
    }
}
