//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{Align2, CentralPanel, Context, Frame, RichText, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Main tic-tac-toe application
#[derive(Default)]
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the turn indicator under the board
    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(self.state.status_text())
                            .size(STATUS_FONT_SIZE)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new("N: new round").size(11.0).color(TEXT_MUTED));
                    });
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                let locked = self.state.game_over.is_some();
                if let Some(pos) = self.board_view.show(ui, &self.state, locked) {
                    self.state.click(pos);
                }
            });
    }

    /// Modal "Game Over" dialog; closing it starts the next round
    fn render_game_over(&mut self, ctx: &Context) {
        let Some(result) = &self.state.game_over else {
            return;
        };
        let message = result.message.clone();

        let mut dismissed = false;
        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new(&message).size(18.0).strong());
                    ui.add_space(12.0);
                    if ui.button(RichText::new("OK").size(14.0)).clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            debug!("game over dialog dismissed");
            self.state.dismiss_game_over();
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (confirm, new_round) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::N),
            )
        });

        if self.state.game_over.is_some() {
            // Enter/Escape close the dialog like the OK button
            if confirm {
                self.state.dismiss_game_over();
            }
        } else if new_round {
            debug!("new round requested");
            self.state.new_round();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_status_bar(ctx);
        self.render_board(ctx);
        self.render_game_over(ctx);
    }
}
