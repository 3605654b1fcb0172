use clap::Parser;
use configuration::load_config;
use database::{DbRepository, connect, run_migrations, seed_demo_data};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use web_server::{AppState, run_server};

/// A small learning-management record service: courses, students and staff
/// with enrollment and staff-assignment relationships over a JSON API.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the listen port from the configuration.
    #[arg(long)]
    port: Option<u16>,

    /// Skip inserting the demo records at startup.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from the .env file, if one exists.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut settings = load_config()?;
    if let Some(port) = cli.port {
        settings.listen_port = port;
    }
    tracing::info!(
        "Configuration loaded (database: {}, port: {})",
        settings.database_url,
        settings.listen_port
    );

    // The pool is the only process-wide resource; it is created here and
    // passed by reference into everything that needs it.
    let pool = connect(&settings.database_url).await?;
    run_migrations(&pool).await?;
    if settings.seed_demo && !cli.no_seed {
        seed_demo_data(&pool).await?;
    }

    let state = Arc::new(AppState {
        repo: DbRepository::new(pool),
    });
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.listen_port));
    run_server(addr, state).await
}
