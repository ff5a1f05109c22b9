use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::fs;
use std::path::PathBuf;

use helmforge::command::generate_commands;
use helmforge::config_loader;
use helmforge::quote::QuoteMode;

/// Command-line generation utility for Helm repository maintenance
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the repository configuration YAML or JSON file
    #[arg(short, long)]
    config: PathBuf,

    /// Output file for generated command lines (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit POSIX-escaped values instead of legacy fixed single quotes
    #[arg(long)]
    escape: bool,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting helmforge command generation");
    info!("Configuration file: {:?}", args.config);

    let mut config = config_loader::load_config(&args.config)?;

    // The CLI flag overrides the configured quoting mode
    if args.escape {
        config.general.escape_values = Some(true);
    }
    if config.quote_mode() == QuoteMode::Escaped {
        info!("Using POSIX-escaped value quoting");
    }

    let commands = generate_commands(&config);
    info!("Generated {} command line(s)", commands.len());

    match &args.output {
        Some(path) => {
            let mut contents = commands.join("\n");
            contents.push('\n');
            fs::write(path, contents)
                .wrap_err_with(|| format!("Failed to write output file '{}'", path.display()))?;
            info!("Wrote command lines to: {:?}", path);
        }
        None => {
            for command in &commands {
                println!("{}", command);
            }
        }
    }

    Ok(())
}
