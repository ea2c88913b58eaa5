//! Board rendering for the tic-tac-toe GUI

use crate::{Pos, BOARD_SIZE};
use egui::{Button, Pos2, Rect, RichText, Sense, Vec2};

use super::game_state::GameState;
use super::theme::*;

/// Board view handles rendering and input for the grid of cell buttons
pub struct BoardView {
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Side length of the whole grid, gaps included
    pub fn grid_extent() -> f32 {
        BOARD_SIZE as f32 * CELL_SIZE + (BOARD_SIZE as f32 - 1.0) * CELL_GAP
    }

    /// Render the board and return the clicked cell if any.
    ///
    /// Buttons are disabled while `locked` is set (the Game Over dialog is up).
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState, locked: bool) -> Option<Pos> {
        let extent = Self::grid_extent();
        let available = ui.available_rect_before_wrap();
        let size = Vec2::splat(extent);

        // Center the grid in the free space
        let origin = Pos2::new(
            available.center().x - extent / 2.0,
            available.center().y - extent / 2.0,
        )
        .max(available.min);
        self.board_rect = Rect::from_min_size(origin, size);
        ui.allocate_rect(self.board_rect, Sense::hover());

        let board = state.board();
        let mut clicked_pos = None;

        for pos in Pos::all() {
            let cell = board.get(pos);
            let fill = if state.is_highlighted(pos) {
                WIN_HIGHLIGHT
            } else {
                CELL_FILL
            };

            let button = Button::new(
                RichText::new(cell.symbol())
                    .size(MARK_FONT_SIZE)
                    .color(CELL_TEXT),
            )
            .fill(fill)
            .min_size(Vec2::splat(CELL_SIZE));

            let response = ui
                .add_enabled_ui(!locked, |ui| ui.put(self.cell_rect(pos), button))
                .inner;
            if response.clicked() {
                clicked_pos = Some(pos);
            }
        }

        clicked_pos
    }

    /// Screen rectangle of a cell's button
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let step = CELL_SIZE + CELL_GAP;
        let min = self.board_rect.min + Vec2::new(pos.col as f32 * step, pos.row as f32 * step);
        Rect::from_min_size(min, Vec2::splat(CELL_SIZE))
    }
}
