// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use catalogd::auth::UserTable;
use catalogd::catalog::CatalogStore;
use catalogd::config::ServiceConfig;
use catalogd::persistence;
use catalogd::server::{build_router, AppState};
use catalogd::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    telemetry::init_telemetry();

    let cfg = ServiceConfig::default();

    let users = UserTable::from_map(persistence::load_table(&cfg.users_path));
    let catalog = CatalogStore::from_map(persistence::load_table(&cfg.catalog_path));
    tracing::info!(
        "Loaded {} user(s) from {:?} and {} item(s) from {:?}",
        users.len(),
        cfg.users_path,
        catalog.len(),
        cfg.catalog_path
    );
    metrics::gauge!("catalogd_catalog_items", catalog.len() as f64);

    let state = Arc::new(AppState {
        catalog: Mutex::new(catalog),
        catalog_path: cfg.catalog_path.clone(),
    });
    let app = build_router(state, Arc::new(users));

    tracing::info!("Listening on {}", cfg.bind_addr);
    let listener = TcpListener::bind(cfg.bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
