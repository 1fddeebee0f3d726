use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cloudscape::commands;
use cloudscape::config::ServerConfig;
use cloudscape::server;
use cloudscape::services::NewCloudConfiguration;
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the animation page and the cloud data API
    Serve {
        #[clap(short, long, default_value = "3000")]
        port: u16,
        #[clap(short, long, default_value = "cloudscape.db")]
        database: String,
        #[clap(long)]
        cors_origin: Option<String>,
        /// Read page templates from this directory instead of the built-in set
        #[clap(long)]
        templates: Option<PathBuf>,
    },
    Db {
        #[clap(subcommand)]
        command: DbCommands,
    },
    /// Manage stored cloud configurations
    Config {
        #[clap(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommands {
    Init {
        #[clap(short, long, default_value = "cloudscape.db")]
        database: String,
    },
    Migrate {
        #[clap(subcommand)]
        direction: server::MigrateDirection,
        #[clap(short, long, default_value = "cloudscape.db")]
        database: String,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    Create {
        #[clap(short, long, default_value = "cloudscape.db")]
        database: String,
        #[clap(short, long)]
        name: String,
        #[clap(long)]
        cloud_count: Option<i32>,
        #[clap(long)]
        dawn_color: Option<String>,
        #[clap(long)]
        sunrise_color: Option<String>,
        #[clap(long)]
        sunset_color: Option<String>,
        #[clap(long)]
        animation_speed: Option<f64>,
    },
    List {
        #[clap(short, long, default_value = "cloudscape.db")]
        database: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Serve {
            port,
            database,
            cors_origin,
            templates,
        } => {
            info!("Starting server on port {}", port);
            let config = ServerConfig {
                port,
                database,
                cors_origin,
                templates,
            };
            server::start_server(&config).await?;
        }
        Commands::Db { command } => match command {
            DbCommands::Init { database } => {
                info!("Initializing database: {}", database);
                server::migrate_database(&database, server::MigrateDirection::Up).await?;
            }
            DbCommands::Migrate {
                direction,
                database,
            } => {
                info!("Running database migration: {:?}", direction);
                server::migrate_database(&database, direction).await?;
            }
        },
        Commands::Config { command } => run_config_command(command).await?,
    }

    Ok(())
}

async fn run_config_command(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Create {
            database,
            name,
            cloud_count,
            dawn_color,
            sunrise_color,
            sunset_color,
            animation_speed,
        } => {
            let record = commands::create_configuration(
                &database,
                NewCloudConfiguration {
                    name: Some(name),
                    cloud_count,
                    dawn_color,
                    sunrise_color,
                    sunset_color,
                    animation_speed,
                },
            )
            .await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        ConfigCommands::List { database } => {
            for line in commands::list_configurations(&database).await? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("handlebars=off,{}", log_level)))
        .without_time()
        .init();
}
