#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let port = match std::env::var("PORT") {
        Ok(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
            tracing::warn!("PORT {raw:?} is not a valid port; using 3000");
            3000
        }),
        Err(_) => 3000,
    };

    let data_file = std::env::var("DATA_FILE").unwrap_or_else(|_| {
        tracing::warn!("DATA_FILE not set; using data/inventory.json");
        "data/inventory.json".to_string()
    });

    let store = stockroom_store::FileStore::new(data_file);
    store
        .ensure_exists()
        .expect("failed to initialize inventory data file");
    tracing::info!("inventory data at {}", store.path().display());

    let app = stockroom_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap_or_else(|e| panic!("failed to bind 0.0.0.0:{port}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
