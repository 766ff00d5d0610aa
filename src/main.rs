use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use todos::core::config::{self, CliOverrides};
use todos::tui;

#[derive(Parser)]
#[command(name = "todos", about = "A small in-memory to-do list for the terminal")]
struct Args {
    /// Config file (default: ~/.todos/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Accent colour, by name or hex (e.g. "magenta", "#2196F3")
    #[arg(long)]
    accent_color: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Disable mouse capture (keeps the terminal's own text selection)
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The logger is not up yet, so a broken config is reported on stderr too
    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => Ok(c),
        Err(e) if args.config.is_some() => {
            eprintln!("todos: {e}");
            return Err(std::io::Error::other(e));
        }
        Err(e) => Err(e),
    };

    let cli = CliOverrides {
        accent_color: args.accent_color,
        log_level: args.log_level,
        log_file: args.log_file,
        no_mouse: args.no_mouse,
    };
    let resolved = config::resolve(file_config.as_ref().unwrap_or(&Default::default()), &cli);

    // File logger: the terminal itself belongs to the UI
    let level = resolved.log_level.parse().unwrap_or(LevelFilter::Info);
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Todos starting up");
    if let Err(e) = &file_config {
        log::warn!("Ignoring config file: {}", e);
    }
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(&resolved)
}
