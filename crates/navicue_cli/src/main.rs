mod commands;

use clap::Parser;
use navicue_core::NavicueConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(name = "navicue", author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "navicue.toml", env = "NAVICUE_CONFIG")]
    config: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("navicue=info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = NavicueConfig::load_or_default(&cli.config);
    debug!("Config: {:?}", config);

    commands::run(cli.command, &config)
}
