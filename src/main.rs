use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use pfsense_provider::config::{PROVIDER_TYPE_NAME, ProviderConfig, log_path};
use pfsense_provider::logging::init_logging;
use pfsense_provider::provider::Provider;

#[derive(Parser)]
#[command(name = "pfsense-provider")]
#[command(version, about = "pfSense provider data sources")]
struct Cli {
    /// Path to a JSON provider configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print data source schemas as JSON
    Schema {
        /// Provider type name prefix used for data source names
        #[arg(long, default_value = PROVIDER_TYPE_NAME)]
        provider_name: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ProviderConfig::from_file(path)?,
        None => ProviderConfig::default(),
    };
    let _guard = init_logging(&config.log, &log_path())?;

    let provider = Provider::new(env!("CARGO_PKG_VERSION"), config);
    let metadata = provider.metadata();
    info!("{} provider {}", metadata.type_name, metadata.version);

    match cli.command {
        Some(Command::Schema { provider_name }) => {
            let schemas = provider.schemas(&provider_name);
            println!("{}", serde_json::to_string_pretty(&schemas)?);
        }
        None => {
            println!("{} {}", metadata.type_name, metadata.version);
        }
    }

    Ok(())
}
