//! 5x5 Tic-Tac-Toe GUI
//!
//! Two players share one window and take turns clicking cells.

use clap::Parser;
use tictactoe::cli::Cli;
use tictactoe::ui::TicTacToeApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .init();

    info!(width = cli.width, height = cli.height, "starting 5x5 tic-tac-toe");

    eframe::run_native(
        "tictactoe5",
        cli.native_options(),
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
