use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::{error, info};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use figma_export::error::{ExportError, Result};
use figma_export::{common, generate_commands, plan, plan_execution};

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
    /// Fetch the Figma file and emit the icon and token modules
    Run {
        #[clap(short, long, default_value = "figma-export.yaml")]
        plan: String,
    },
    /// Write a default plan file
    Init {
        #[clap(short, long, default_value = "figma-export.yaml")]
        plan: String,
    },
    Generate {
        #[clap(subcommand)]
        command: GenerateCommands,
    },
}

#[derive(Subcommand, Debug)]
enum GenerateCommands {
    Template { name: String },
    Sample { dir: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Run { plan } => {
            // The access token is resolved once here and handed to the
            // client; nothing else reads the environment.
            let token = std::env::var("FIGMA_TOKEN").map_err(|_| {
                ExportError::Authentication("FIGMA_TOKEN is not set".to_string())
            })?;
            plan_execution::execute_plan(&plan, token).await?;
        }
        Commands::Init { plan } => {
            info!("Initializing plan: {}", plan);
            let serialized = serde_yaml::to_string(&plan::Plan::default())
                .map_err(|e| ExportError::Config(e.to_string()))?;
            common::write_string_to_file(&plan, &serialized)?;
        }
        Commands::Generate { command } => match command {
            GenerateCommands::Template { name } => {
                info!("Generating template: {}", name);
                generate_commands::generate_template(name);
            }
            GenerateCommands::Sample { dir } => {
                info!("Generating sample: {}", dir);
                generate_commands::generate_sample(dir)?;
            }
        },
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
