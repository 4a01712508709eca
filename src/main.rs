// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use cosmic::Application;
use scan_station::app::AppModel;
use scan_station::config::Config;
use scan_station::constants::layout;

#[derive(Parser)]
#[command(name = "scan-station")]
#[command(about = "ID scan station kiosk for medical missions")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run in terminal mode (renders the kiosk to the terminal)
    Terminal,

    /// Run a scripted session and print the final station snapshot as JSON
    Simulate {
        /// Steps separated by commas, e.g. "camera-on,capture,wait:1500"
        #[arg(short, long)]
        script: String,

        /// Override the simulated OCR delay in milliseconds
        #[arg(long)]
        ocr_delay: Option<u64>,

        /// Pretty-print the snapshot
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=scan_station=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Terminal) => {
            let (_, config) = Config::load(AppModel::APP_ID);
            scan_station::terminal::run(&config)?;
            Ok(())
        }
        Some(Commands::Simulate {
            script,
            ocr_delay,
            pretty,
        }) => {
            scan_station::cli::simulate(&script, ocr_delay, pretty)?;
            Ok(())
        }
        None => run_gui(),
    }
}

fn run_gui() -> Result<(), Box<dyn std::error::Error>> {
    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(
            layout::SCREEN_WIDTH,
            layout::SCREEN_HEIGHT,
        ))
        .size_limits(
            cosmic::iced::Limits::NONE
                .min_width(layout::SCREEN_WIDTH)
                .min_height(layout::SCREEN_HEIGHT),
        );

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<AppModel>(settings, ())?;

    Ok(())
}
