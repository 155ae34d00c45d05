mod api;
mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use crate::core::config;

#[derive(Parser)]
#[command(name = "abide", about = "Spiritual guidance companion for your terminal")]
struct Args {
    /// Backend API base URL (overrides config file and ABIDE_API_URL)
    #[arg(short, long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to abide.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("abide.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Falling back to default config: {e}");
            Default::default()
        }
    };
    let resolved = config::resolve(&file_config, args.api_url.as_deref());
    log::info!("Abide starting up against {}", resolved.base_url);

    tui::run(resolved)
}
