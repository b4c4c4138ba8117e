use anyhow::Result;
use blog_graphql::{
    config::Config,
    graphql::create_schema,
    observability::{self, metrics},
    server::{self, RouteOptions},
    storage::{InMemoryStorage, Storage},
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "blog_graphql")]
#[command(about = "In-memory GraphQL API for users, posts and comments")]
#[command(version)]
struct Cli {
    /// Path to the TOML config file; defaults apply when it does not exist
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// IP address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to run the server on
    #[arg(short, long)]
    port: Option<u16>,

    /// Serve Prometheus metrics at /metrics
    #[arg(long)]
    metrics: bool,

    /// Start with empty collections instead of the demo data
    #[arg(long)]
    no_seed: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.metrics {
            config.metrics.enabled = true;
        }
        if self.no_seed {
            config.store.seed_demo_data = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config)?;
    cli.apply(&mut config);

    let _log_guard = observability::init_logging(&config.logging);

    if config.metrics.enabled {
        if let Err(e) = metrics::init() {
            warn!("Failed to initialize metrics: {e}");
        }
    }

    let storage: Arc<dyn Storage> = if config.store.seed_demo_data {
        info!("Using in-memory storage with demo data (data will not persist)");
        Arc::new(InMemoryStorage::with_seed_data())
    } else {
        info!("Using empty in-memory storage (data will not persist)");
        Arc::new(InMemoryStorage::new())
    };

    let addr = config.socket_addr()?;
    let app = server::create_server(
        create_schema(storage),
        RouteOptions {
            graphiql: config.server.graphiql,
            metrics: config.metrics.enabled,
        },
    );

    if config.server.graphiql {
        info!("GraphiQL UI: http://{addr}/graphiql");
    }
    server::start_server(app, addr).await
}
