// dumpling - run Dumpling AI node operations from the command line

use dumpling::commands::{self, credential, describe, run};
use dumpling::error::{DumplingError, EXIT_SUCCESS};
use dumpling::logger::{initialize as LoggerInitialize, level_from_verbosity};

use common::ErrorLocation;

use std::fs::File;
use std::io::stdin;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser)]
#[command(name = "dumpling")]
#[command(about = "Run Dumpling AI operations (transcripts, search, scraping) over JSON items")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Config file (default: ./dumpling.toml, then the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run input items through the node and print output items as JSON
    #[command(after_help = "\
Examples:
  echo '{\"operation\":\"search\",\"query\":\"rust\"}' | dumpling run
  dumpling run --input items.json --continue-on-fail --pretty")]
    Run {
        /// JSON file with one item or an array of items ('-' for stdin)
        #[arg(long, short, default_value = "-")]
        input: PathBuf,

        /// Turn per-item failures into {"error": ...} items instead of aborting
        #[arg(long)]
        continue_on_fail: bool,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the resource/operation table with parameters and defaults
    Describe {
        /// Only list operations of this resource (dataApi, webScraping)
        #[arg(long)]
        resource: Option<String>,
    },

    /// Check that DUMPLING_AI_API_KEY is accepted by the API
    TestCredential,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggerInitialize(level_from_verbosity(cli.verbose), cli.log_file.as_deref()) {
        eprintln!("{e}");
        return ExitCode::from(e.exit_code());
    }

    match execute(cli).await {
        Ok(Some(output)) => {
            println!("{output}");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(None) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn execute(cli: Cli) -> Result<Option<String>, DumplingError> {
    match cli.command {
        Commands::Run {
            input,
            continue_on_fail,
            pretty,
        } => {
            let config = commands::load_config(cli.config.as_deref())?;
            let credential = commands::load_credential()?;

            let items = if input.as_os_str() == "-" {
                run::read_items(stdin().lock())?
            } else {
                let file = File::open(&input).map_err(|e| DumplingError::Input {
                    message: format!("Failed to open {}: {e}", input.display()),
                    location: ErrorLocation::caller(),
                })?;
                run::read_items(file)?
            };
            info!("Read {} input item(s)", items.len());

            let output = run::run_items(&config, &credential, &items, continue_on_fail).await?;
            run::render_output(&output, pretty).map(Some)
        }
        Commands::Describe { resource } => describe::describe(resource.as_deref()).map(Some),
        Commands::TestCredential => {
            let config = commands::load_config(cli.config.as_deref())?;
            let credential = commands::load_credential()?;
            credential::test_credential(&config, &credential).await?;
            Ok(Some("Credential accepted".to_string()))
        }
    }
}
