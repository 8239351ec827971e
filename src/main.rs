use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use profile_card::core::config::{self, ResolvedConfig};
use profile_card::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "profile-card", about = "Browse a directory of user profile cards")]
struct Args {
    /// Config file (defaults to ~/.profile-card/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start route, e.g. "Details/1" (a missing id means the first user)
    #[arg(short, long)]
    route: Option<String>,

    /// Log level for profile-card.log (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to profile-card.log in current directory.
    // The logger accepts every level; the global max level does the filtering.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("profile-card.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    log::set_max_level(config::startup_log_level(args.log_level));

    let (resolved, config_error) = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => match config::resolve(&loaded, args.log_level) {
            Ok(resolved) => (resolved, None),
            Err(e) => (ResolvedConfig::fallback(args.log_level, Some(&loaded)), Some(e)),
        },
        Err(e) => (ResolvedConfig::fallback(args.log_level, None), Some(e)),
    };
    log::set_max_level(resolved.log_level);

    if let Some(e) = config_error {
        eprintln!("profile-card: {e}; using built-in directory");
        log::warn!("Config rejected, using built-in directory: {}", e);
    }

    log::info!(
        "Profile card starting with {} users",
        resolved.directory.len()
    );

    tui::run(resolved, args.route.as_deref())
}
