mod build_cmd;
mod check_cmd;
mod config;
mod macros_cmd;
mod terminal_output;
mod validate_cmd;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use build_cmd::BuildArgs;
use config::Config;
use cronforge_config::{config_dir, config_file_path};

#[derive(Parser)]
#[command(name = "cronforge")]
#[command(about = "Build and validate cron expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether an expression is a valid cron expression or macro
    Validate {
        /// Quote it: "*/5 * * * *"
        expression: String,
    },
    /// Compose an expression from builder operations
    Build(BuildArgs),
    /// List the supported macros and their expansions
    Macros,
    /// Validate every schedule in a schedules file
    Check {
        /// Defaults to $CRONFORGE_CONFIG, then ~/.cronforge/schedules.yaml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let config = Config::from_env();
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Validate { expression } => {
            cronforge_logging::init_logger(&config.logger_options(None));
            validate_cmd::run(&expression)
        }
        Commands::Build(args) => {
            cronforge_logging::init_logger(&config.logger_options(None));
            build_cmd::run(&args)
        }
        Commands::Macros => {
            cronforge_logging::init_logger(&config.logger_options(None));
            macros_cmd::run();
            ExitCode::SUCCESS
        }
        Commands::Check { config: path } => {
            let path = path
                .or_else(|| config.config_path.clone())
                .unwrap_or_else(|| config_file_path(&config_dir()));
            let file_logging = check_cmd::file_logging(&path).await;
            cronforge_logging::init_logger(&config.logger_options(file_logging.as_ref()));
            debug!(path = %path.display(), "Checking schedules file");
            check_cmd::run(&path).await?
        }
    };

    Ok(code)
}
