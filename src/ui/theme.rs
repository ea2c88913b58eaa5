//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Cell buttons
pub const CELL_FILL: Color32 = Color32::LIGHT_GRAY;
pub const CELL_TEXT: Color32 = Color32::from_rgb(30, 30, 35);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(120, 210, 130);

// Panel
pub const PANEL_BG: Color32 = Color32::from_rgb(245, 245, 245);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(40, 40, 45);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const CELL_SIZE: f32 = 100.0;
pub const CELL_GAP: f32 = 5.0;
pub const MARK_FONT_SIZE: f32 = 24.0;
pub const STATUS_FONT_SIZE: f32 = 16.0;

// Window defaults
pub const WINDOW_TITLE: &str = "5x5 Tic-Tac-Toe";
pub const WINDOW_WIDTH: f32 = 600.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
