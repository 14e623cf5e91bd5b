use clap::{Parser, Subcommand};
use dns_failover_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "dns-failover")]
#[command(version)]
#[command(about = "DNS failover reconciler - probes endpoints over DNS-over-TLS and repoints DNS to standby")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Database path
    #[arg(long, global = true)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Seconds between reconciliation passes
    #[arg(short = 'i', long, global = true)]
    interval: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Reconcile periodically until interrupted (default)
    Run,
    /// Run a single reconciliation pass and print its report
    Once,
    /// List stored monitor targets
    List,
    /// Insert or replace monitor targets from a JSON file
    Import {
        /// JSON array of monitor targets
        file: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
        interval_secs: cli.interval,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting DNS failover v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => commands::run(&config, pool).await,
        Command::Once => commands::once(&config, pool).await,
        Command::List => commands::list(pool).await,
        Command::Import { file } => commands::import(pool, &file).await,
    }
}
