use library_inventory::{
    adapters::memory::LibraryStore as InMemoryLibraryStore,
    application::library::{ServiceDependencies, seed_library},
    config::Config,
    console::run_console,
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env();

    // Initialize tracing (stdout belongs to the menu)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Initialize adapters
    let library_store = Arc::new(InMemoryLibraryStore::new());
    let deps = ServiceDependencies { library_store };

    // Seed members and books
    let seed = config.load_seed()?;
    if let Some(path) = &config.seed_file {
        tracing::info!("Seed file: {}", path.display());
    }
    seed_library(&deps, &seed).await?;

    println!("Welcome to the Console Library Management System");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    run_console(&deps, stdin, &mut stdout).await?;

    Ok(())
}
