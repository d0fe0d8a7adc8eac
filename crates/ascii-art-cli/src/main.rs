//! ascii-art-generator - Render text as FIGlet art wrapped in JSON

mod cli;
mod error;
mod logging;
mod output;
mod render;

use clap::Parser;

use crate::logging::init_logging;

fn main() {
    // Missing or extra arguments exit here with clap's usage error
    let cli_args = cli::Cli::parse();

    if let Err(e) = init_logging(None, None) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let result = cli::AsciiArtApp::new()
        .map_err(anyhow::Error::from)
        .and_then(|app| app.run(cli_args));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
