#![allow(non_snake_case)]

use std::sync::Arc;

use dioxus_logger::tracing;

use evebuddy::{
    app::{
        config::Config,
        service::memory::{MemoryStore, Snapshot},
        status::StatusCache,
        AppContext,
    },
    client,
};

fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let snapshot = match &config.snapshot_path {
        Some(path) => match Snapshot::from_path(path) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!("Failed to load snapshot {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::warn!("EVEBUDDY_SNAPSHOT_PATH is not set, starting with empty data");
            Snapshot::default()
        }
    };

    let store = Arc::new(MemoryStore::new(snapshot));
    let status = StatusCache::new();
    store.init_status_cache(&status);
    let ctx = AppContext::new(store.clone(), store, status).with_config(&config);

    tracing::info!(layout = %config.layout, "Starting EveBuddy");

    dioxus::LaunchBuilder::new()
        .with_context(ctx)
        .launch(client::App);
}
