use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use hisaab::cli::{handle_serve_command, handle_statement_command, ServeArgs, StatementArgs};
use hisaab::config::{HisaabPaths, Settings};
use hisaab::storage::{initialize_storage, SAMPLE_USER_ID};

#[derive(Parser)]
#[command(
    name = "hisaab",
    author = "Hisaab Developers",
    version,
    about = "Monthly account statements from your transactions and budgets",
    long_about = "Hisaab computes a monthly account statement (period totals, budget \
                  analysis, a personalised tip and a twelve month history) and renders \
                  it for the terminal, as JSON, or as a printable HTML document. It can \
                  also serve statements over HTTP."
)]
struct Cli {
    /// Base directory for settings and data files
    #[arg(long, global = true, env = "HISAAB_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print or export a user's account statement
    Statement(StatementArgs),

    /// Run the statement HTTP API
    Serve(ServeArgs),

    /// Create the settings file and empty data files
    Init {
        /// Seed the data files with the sample account
        #[arg(long)]
        sample: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hisaab=info,tower_http=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let paths = match cli.data_dir {
        Some(dir) => HisaabPaths::with_base_dir(dir),
        None => HisaabPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Statement(args)) => {
            handle_statement_command(&paths, &settings, args).await?;
        }
        Some(Commands::Serve(args)) => {
            handle_serve_command(&paths, &settings, args).await?;
        }
        Some(Commands::Init { sample }) => {
            println!("Initializing Hisaab at: {}", paths.base_dir().display());
            let anchor = sample.then(|| Local::now().date_naive());
            let written = initialize_storage(&paths, anchor)?;
            if !paths.is_initialized() {
                settings.save(&paths)?;
                println!("Created {}", paths.settings_file().display());
            }
            for file in &written {
                println!("Created {}", file.display());
            }
            println!("Initialization complete!");
            if sample {
                println!();
                println!("Try: hisaab statement {}", SAMPLE_USER_ID);
            }
        }
        Some(Commands::Config) => {
            println!("Hisaab Configuration");
            println!("====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Brand name:      {}", settings.brand_name);
            println!("  Data source:     {}", settings.data_source);
            println!("  Server address:  {}", settings.server.bind_address());
        }
        None => {
            println!("Hisaab - monthly account statements");
            println!();
            println!("Run 'hisaab --help' for usage information.");
        }
    }

    Ok(())
}
