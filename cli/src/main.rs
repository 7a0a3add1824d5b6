//! Uniqrode CLI - piped text as a QR code in the terminal.

mod commands;
mod input;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uniqrode_core::constants::{DEFAULT_LEVEL, DEFAULT_MODE, DEFAULT_QUIET_ZONE, MAX_QUIET_ZONE};
use uniqrode_core::Config;

#[derive(Parser)]
#[command(name = "uniqrode")]
#[command(about = "Draw piped text as a QR code made of Unicode blocks", long_about = None)]
struct Cli {
    /// Recovery level: 1 = Low, 2 = Medium, 3 = High, 4 = Highest
    #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
    level: u8,

    /// Draw mode: 1 = one module per glyph, 2 = two stacked, 3 = two by two
    #[arg(short, long, default_value_t = DEFAULT_MODE)]
    mode: u8,

    /// Draw dark modules filled, for light terminal backgrounds
    #[arg(short, long)]
    inverse: bool,

    /// Light border around the code, in modules (0..=64)
    #[arg(short, long, default_value_t = DEFAULT_QUIET_ZONE, value_parser = parse_quiet_zone)]
    quiet_zone: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            mode: self.mode,
            level: self.level,
            inverse: self.inverse,
            quiet_zone: self.quiet_zone,
        }
    }
}

fn parse_quiet_zone(value: &str) -> Result<usize, String> {
    let modules: usize = value.parse().map_err(|e| format!("{}", e))?;
    if modules > MAX_QUIET_ZONE {
        return Err(format!("must be at most {}", MAX_QUIET_ZONE));
    }
    Ok(modules)
}

/// Log filter from `RUST_LOG`, or warnings only for our crates.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
}

const DEFAULT_LOG_DIRECTIVES: &str = "uniqrode=warn,uniqrode_core=warn";

#[derive(Subcommand)]
enum Commands {
    /// Read stdin and draw it as a QR code (default)
    Draw,
    /// List the available draw modes
    Modes,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    match cli.command.unwrap_or(Commands::Draw) {
        Commands::Draw => commands::draw_qr(&config)?,
        Commands::Modes => commands::list_modes(),
    }

    Ok(())
}
