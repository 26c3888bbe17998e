// src/main.rs
// TaskTracker - demo task-tracking API

use anyhow::Result;
use clap::{Parser, Subcommand};
use tasktracker::{
    analytics::summarize, api::create_router, config::TrackerConfig, seed::seed_demo_data,
    state::{AppState, utc_today}, store::EntityStore,
};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "tasktracker")]
#[command(about = "Demo task-tracking API with per-user analytics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Address to bind (overrides TRACKER_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides TRACKER_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Start with an empty store instead of the demo fixtures
        #[arg(long)]
        no_seed: bool,
    },

    /// Print the analytics summary of a freshly seeded store as JSON
    Summary,
}

async fn run_server(config: TrackerConfig) -> Result<()> {
    let store = if config.seed_demo {
        seed_demo_data(utc_today())?
    } else {
        info!("Demo seeding disabled, starting with an empty store");
        EntityStore::new()
    };

    let state = AppState::new(store);
    let app = create_router(state, &config);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("TaskTracker listening on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}

fn print_summary() -> Result<()> {
    let today = utc_today();
    let store = seed_demo_data(today)?;
    let summary = summarize(&store, today);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = TrackerConfig::from_env();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.tracing_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        no_seed: false,
    }) {
        Commands::Serve {
            host,
            port,
            no_seed,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if no_seed {
                config.seed_demo = false;
            }
            info!("Starting TaskTracker v{}", env!("CARGO_PKG_VERSION"));
            run_server(config).await
        }
        Commands::Summary => print_summary(),
    }
}
