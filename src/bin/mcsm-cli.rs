use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;

use mcsm_client::config::{load_config, validate_config, ClientConfig};
use mcsm_client::observability::logging;
use mcsm_client::{McsmError, Pagination, Transport};

#[derive(Parser)]
#[command(name = "mcsm-cli")]
#[command(about = "Management CLI for an MCSManager panel", long_about = None)]
struct Cli {
    /// TOML config file; MCSM_* environment variables are applied on top.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Panel origin, overrides config and environment.
    #[arg(short, long)]
    url: Option<String>,

    /// API key, overrides config and environment.
    #[arg(short, long)]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Panel system overview
    Overview,
    /// Remote services system summary
    Services,
    /// Search users by name
    Users {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Show one user, or the key owner when no uuid is given
    UserInfo {
        #[arg(long)]
        uuid: Option<String>,
    },
    /// List daemon nodes
    Nodes {
        /// Lightweight summary instead of full records
        #[arg(long)]
        list: bool,
    },
    /// Force the panel to reconnect a node
    Reconnect { uuid: String },
    /// Show one instance
    Instance { uuid: String, remote: String },
    /// Search instances on a node
    Instances {
        remote: String,
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Start an instance
    Start { uuid: String, remote: String },
    /// Stop an instance
    Stop { uuid: String, remote: String },
    /// Kill an instance
    Kill { uuid: String, remote: String },
    /// Restart an instance
    Restart { uuid: String, remote: String },
    /// Send a console command to an instance
    Command {
        uuid: String,
        remote: String,
        command: String,
    },
    /// Print recent instance output
    Log { uuid: String, remote: String },
}

fn resolve_config(cli: &Cli) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?.merge_env(),
        None => ClientConfig::default().merge_env(),
    };
    if let Some(url) = &cli.url {
        config = config.with_origin(url.clone());
    }
    if let Some(key) = &cli.key {
        config = config.with_api_key(key.clone());
    }
    validate_config(&config).map_err(mcsm_client::config::ConfigError::Validation)?;
    Ok(config)
}

async fn dispatch(transport: &Transport, command: Commands) -> mcsm_client::Result<Value> {
    match command {
        Commands::Overview => transport.panel().overview().await,
        Commands::Services => transport.panel().remote_services_system().await,
        Commands::Users {
            name,
            page,
            page_size,
        } => {
            let defaults = Pagination::default();
            let pagination = Pagination::new(
                page.unwrap_or(defaults.page),
                page_size.unwrap_or(defaults.page_size),
            );
            transport.users().search(&name, Some(pagination)).await
        }
        Commands::UserInfo { uuid } => transport.users().user_info(uuid.as_deref(), true).await,
        Commands::Nodes { list: true } => transport.remotes().list().await,
        Commands::Nodes { list: false } => transport.remotes().list_all().await,
        Commands::Reconnect { uuid } => transport.remotes().reconnect(&uuid).await,
        Commands::Instance { uuid, remote } => transport.instances().get(&uuid, &remote).await,
        Commands::Instances { remote, name } => {
            transport.instances().search(&remote, &name, None).await
        }
        Commands::Start { uuid, remote } => transport.instances().open(&uuid, &remote).await,
        Commands::Stop { uuid, remote } => transport.instances().stop(&uuid, &remote).await,
        Commands::Kill { uuid, remote } => transport.instances().kill(&uuid, &remote).await,
        Commands::Restart { uuid, remote } => transport.instances().restart(&uuid, &remote).await,
        Commands::Command {
            uuid,
            remote,
            command,
        } => transport.instances().command(&uuid, &remote, &command).await,
        Commands::Log { uuid, remote } => transport.instances().output_log(&uuid, &remote).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    logging::init(&config.log_level);

    let transport = match Transport::from_config(&config) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let result = dispatch(&transport, cli.command).await;
    transport.close();

    match result {
        Ok(json) => match serde_json::to_string_pretty(&json) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(McsmError::Status { status }) => {
            eprintln!("Error: panel returned status {}", status);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
