//! Command-line options for the GUI launcher.

use clap::Parser;

use crate::ui::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

/// 5x5 Tic-Tac-Toe for two players on one screen
#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe5")]
#[command(about = "5x5 tic-tac-toe, two local players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Initial window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: f32,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl Cli {
    /// Window options for `eframe::run_native`
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width, self.height])
                .with_min_inner_size([300.0, 300.0])
                .with_title(WINDOW_TITLE),
            ..Default::default()
        }
    }
}
