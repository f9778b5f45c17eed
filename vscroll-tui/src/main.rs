mod app;
mod draw;
mod host;
mod terminal;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use simplelog::{Config, LevelFilter, WriteLogger};
use vscroll::{OverlayScrollbar, ScrollbarConfig};

use crate::app::App;
use crate::draw::Content;
use crate::terminal::TerminalGuard;

/// Scroll a large synthetic page with overlay scrollbar thumbs.
#[derive(Parser, Debug)]
#[command(name = "vscroll-tui")]
#[command(version, about, long_about = None)]
struct Args {
    /// Content width in cells
    #[arg(default_value_t = 400)]
    width: u32,

    /// Content height in cells
    #[arg(default_value_t = 200)]
    height: u32,

    /// Cells moved per wheel tick
    #[arg(short, long, default_value_t = 3.0)]
    wheel: f64,

    /// Thumb color (#rgb, #rrggbb, rgb() or rgba())
    #[arg(short, long, default_value = "#888")]
    color: String,

    /// Log file
    #[arg(long, default_value = "vscroll-tui.log")]
    log: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let log_file = match File::create(&args.log) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: failed to create log file {}: {}", args.log, e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("Error: failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    let config = ScrollbarConfig::default()
        .content_size(f64::from(args.width), f64::from(args.height))
        .wheel_amount(args.wheel)
        .min_thumb_length(1.0)
        .scroll_color(args.color);
    let bar = match OverlayScrollbar::new(config) {
        Ok(bar) => bar,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let content = Content {
        width: args.width,
        height: args.height,
    };
    let result = match TerminalGuard::new() {
        Ok(mut term) => App::new(bar, content).run(&mut term).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("terminal error: {}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
