use clap::Parser;
use itemsvc::config::{Cli, Config};
use itemsvc::handler::AppState;
use itemsvc::store::ItemStore;
use itemsvc::{app, init_tracing};

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let cfg = Config::from_cli(&args).unwrap_or_else(|e| {
        eprintln!("failed to load config file {:?}: {:#}", args.config_path, e);
        std::process::exit(1);
    });

    init_tracing(&cfg.log);
    tracing::info!("itemsvc starting");

    let store = if cfg.app.seed {
        ItemStore::seeded()
    } else {
        ItemStore::new()
    };
    let app = app(AppState::new(store));

    let address = cfg.app.get_address();
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup tcp listener");
        std::process::exit(1);
    });

    tracing::info!("server starting on port {}", cfg.app.get_port());
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "server exited");
        std::process::exit(1);
    }
}
