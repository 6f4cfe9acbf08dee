use clap::Parser;
use eulerpad::core::config::{self, SourceMode};
use eulerpad::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "eulerpad", about = "Project Euler progress panel for the terminal")]
struct Args {
    /// Problem source mode (bulk listing or per-problem fetch)
    #[arg(short, long, value_enum)]
    mode: Option<SourceMode>,

    /// Jump to a specific problem instead of the persisted one
    #[arg(short, long)]
    problem: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to eulerpad.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("eulerpad.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        config::EulerpadConfig::default()
    });
    let resolved = config::resolve(&file_config, args.mode);

    log::info!("Eulerpad starting up (mode: {:?})", resolved.mode);

    tui::run(resolved, args.problem)
}
