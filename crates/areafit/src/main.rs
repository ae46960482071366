//! areafit - check dropped images against a pixel-area budget and downsize
//! the ones that are too large.
//!
//! # Usage
//!
//! ```bash
//! # Check a few files (and their "Focused " counterparts)
//! areafit check cat.png "Focused cat.png" dog.jpg
//!
//! # Check a folder with a tighter budget and copy resized files out
//! areafit check ./photos --max-area 300000 --save-to ./resized
//!
//! # View configuration
//! areafit config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// areafit - proportional downsizing by pixel area.
#[derive(Parser, Debug)]
#[command(name = "areafit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check images and downsize the ones over the pixel-area budget
    Check(cli::check::CheckArgs),

    /// View configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go through eprintln.
    let config = match areafit_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `areafit config path`."
            );
            areafit_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("areafit v{}", areafit_core::VERSION);

    match cli.command {
        Commands::Check(args) => cli::check::execute(args, config),
        Commands::Config(args) => cli::config::execute(args, &config),
    }
}
