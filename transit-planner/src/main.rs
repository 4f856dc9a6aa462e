use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use transit_planner::commands::{self, CommandError};
use transit_planner::domain::{RouteType, RouteTypeFilter};
use transit_planner::graph::{BuildConfig, GraphBuilder, TransitApi};
use transit_planner::mbta::{FixtureApi, MbtaClient, MbtaConfig};
use transit_planner::planner::PlanRequest;

/// Answer questions about the MBTA rapid transit network.
#[derive(Parser)]
#[command(name = "transit-planner", version)]
struct Cli {
    /// Base URL of the MBTA v3 API
    #[arg(long, global = true, env = "MBTA_BASE_URL", default_value = "https://api-v3.mbta.com")]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "MBTA_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Maximum number of API requests in flight
    #[arg(long, global = true, default_value_t = 5)]
    max_concurrent: usize,

    /// Number of per-route stop requests issued together while building
    #[arg(long, global = true, default_value_t = 8)]
    batch_size: usize,

    /// Read saved API responses from this directory instead of the network
    #[arg(long, global = true, value_name = "DIR")]
    fixtures: Option<PathBuf>,

    /// Route types to include, as codes or names (e.g. 0,1 or light-rail,heavy-rail)
    #[arg(long = "route-type", global = true, value_delimiter = ',', default_values = ["0", "1"])]
    route_types: Vec<RouteType>,

    /// Include routes of every type
    #[arg(long, global = true, conflicts_with = "route_types")]
    all_types: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the long names of every route
    Lines,

    /// Print the routes with the most and fewest stops, and all transfer stops
    Stats,

    /// Find which routes to take between two stops
    Path {
        /// Name of the stop to start from (case insensitive)
        #[arg(long)]
        source: String,

        /// Name of the stop to end at (case insensitive)
        #[arg(long)]
        dest: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "transit_planner=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> anyhow::Result<Vec<String>> {
    if let Some(dir) = &cli.fixtures {
        let api = FixtureApi::load(dir)
            .with_context(|| format!("failed to load fixtures from {}", dir.display()))?;
        return Ok(dispatch(&api, cli).await?);
    }

    let config = MbtaConfig::new()
        .with_base_url(&cli.base_url)
        .with_timeout(cli.timeout_secs)
        .with_max_concurrent(cli.max_concurrent);
    let api = MbtaClient::new(config).context("failed to create MBTA client")?;

    Ok(dispatch(&api, cli).await?)
}

impl Cli {
    fn route_filter(&self) -> RouteTypeFilter {
        if self.all_types {
            RouteTypeFilter::all()
        } else {
            self.route_types.iter().copied().collect()
        }
    }

    fn build_config(&self) -> BuildConfig {
        BuildConfig {
            batch_size: self.batch_size,
        }
    }
}

async fn dispatch<A: TransitApi>(api: &A, cli: &Cli) -> Result<Vec<String>, CommandError> {
    let filter = cli.route_filter();
    let builder = GraphBuilder::new(api, cli.build_config());

    match &cli.command {
        Command::Lines => commands::list_routes(api, &filter).await,
        Command::Stats => commands::stop_stats(&builder, &filter).await,
        Command::Path { source, dest } => {
            let request = PlanRequest::new(source, dest);
            commands::route_path(&builder, &filter, &request).await
        }
    }
}
