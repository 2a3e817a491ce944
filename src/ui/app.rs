//! Main application for the tic-tac-toe GUI

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::Mark;
use crate::rules::GameStatus;
use crate::session::{GameMode, Session};

use super::board_view::BoardView;
use super::theme::*;

/// Pause before the computer's reply, for pacing. The policy itself
/// is instantaneous; the delay just makes the move readable.
const COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    session: Session,
    board_view: BoardView,
    last_move: Option<usize>,
    /// Set when the computer's turn starts; the move is applied once
    /// the pacing delay has elapsed
    computer_move_due: Option<Instant>,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            session: Session::new(GameMode::default()),
            board_view: BoardView::default(),
            last_move: None,
            computer_move_due: None,
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self, mode: GameMode) {
        self.session.set_mode(mode);
        self.last_move = None;
        self.computer_move_due = None;
    }

    fn reset(&mut self) {
        self.session.reset();
        self.last_move = None;
        self.computer_move_due = None;
    }

    /// Apply the computer's move once its pacing delay has elapsed
    fn drive_computer(&mut self, ctx: &Context) {
        if !self.session.is_computer_turn() {
            self.computer_move_due = None;
            return;
        }

        let due = *self
            .computer_move_due
            .get_or_insert_with(|| Instant::now() + COMPUTER_MOVE_DELAY);

        if Instant::now() >= due {
            if let Ok(choice) = self.session.choose_computer_move() {
                if self.session.play(choice.cell).is_ok() {
                    self.last_move = Some(choice.cell);
                }
            }
            self.computer_move_due = None;
        } else {
            ctx.request_repaint_after(due - Instant::now());
        }
    }

    /// Status line, matching the classic strings
    fn status_text(&self) -> String {
        match self.session.status() {
            GameStatus::InProgress { turn } => {
                if self.session.is_computer_turn() {
                    "Computer's turn".to_string()
                } else {
                    format!("Player {}'s turn", turn.label())
                }
            }
            GameStatus::Won { winner, .. } => format!("Player {} wins!", winner.label()),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (Two Players)").clicked() {
                        self.new_game(GameMode::HumanVsHuman);
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs Computer)").clicked() {
                        self.new_game(GameMode::HumanVsComputer { computer: Mark::O });
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Restart").clicked() {
                        self.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode() {
                        GameMode::HumanVsHuman => "Two Players".to_string(),
                        GameMode::HumanVsComputer { computer } => {
                            format!("vs Computer ({})", computer.label())
                        }
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with status and controls
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_mode_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).strong().color(X_COLOR));
            ui.label(RichText::new("O").size(20.0).strong().color(O_COLOR));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TOE")
                    .size(20.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let accent = match self.session.status() {
                GameStatus::InProgress { turn } => match turn {
                    Mark::X => X_COLOR,
                    _ => O_COLOR,
                },
                GameStatus::Won { .. } => WIN_HIGHLIGHT,
                GameStatus::Draw => STATUS_ACCENT,
            };

            ui.label(
                RichText::new(self.status_text())
                    .size(16.0)
                    .strong()
                    .color(accent),
            );

            if self.session.is_computer_turn() {
                ui.add_space(4.0);
                ui.label(
                    RichText::new("thinking...")
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_mode_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MODE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let pvp = self.session.mode() == GameMode::HumanVsHuman;

            ui.horizontal(|ui| {
                if ui.selectable_label(pvp, "Two Players").clicked() && !pvp {
                    self.new_game(GameMode::HumanVsHuman);
                }
                if ui.selectable_label(!pvp, "vs Computer").clicked() && pvp {
                    self.new_game(GameMode::HumanVsComputer { computer: Mark::O });
                }
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(if self.session.in_progress() {
                    BUTTON_BG
                } else {
                    BUTTON_ACTIVE
                })
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                if ui
                    .add(
                        egui::Label::new(
                            RichText::new("New Game").size(13.0).color(TEXT_PRIMARY),
                        )
                        .sense(egui::Sense::click()),
                    )
                    .clicked()
                {
                    self.reset();
                }
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = BOARD_BG;

            let winning_line = match self.session.status() {
                GameStatus::Won { line, .. } => Some(line),
                _ => None,
            };

            let clicks_enabled =
                self.session.in_progress() && !self.session.is_computer_turn();

            let clicked = self.board_view.show(
                ui,
                self.session.board(),
                self.session.turn(),
                self.last_move,
                winning_line,
                !clicks_enabled,
            );

            if let Some(idx) = clicked {
                if self.session.play(idx).is_ok() {
                    self.last_move = Some(idx);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.drive_computer(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
