use crate::app::AppState;
use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::domain::{Catalog, StaticCatalog};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod db;
mod domain;
mod errors;
mod favorites;
mod mortgage;
mod query;
mod responses;
mod router;
mod session;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("estatehub=info")),
        )
        .init();

    // 1️⃣ Configuration
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 2️⃣ Key/value database
    let db = Database::new(cfg.db_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    // 3️⃣ Listing + agent catalog
    let catalog = match StaticCatalog::bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "catalog failed to load");
            std::process::exit(1);
        }
    };
    tracing::info!(
        listings = catalog.listings().len(),
        agents = catalog.agents().len(),
        "catalog loaded"
    );

    let state = AppState::new(db, catalog);

    // 4️⃣ Serve
    tracing::info!(addr = %cfg.addr, workers = cfg.max_workers, "starting server");
    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
