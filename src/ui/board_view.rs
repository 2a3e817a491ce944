//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};

use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index, if any.
    ///
    /// Clicks are only reported for empty cells while the game is in
    /// progress; occupied cells and terminal positions are inert.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Mark,
        last_move: Option<usize>,
        winning_line: Option<[usize; 3]>,
        game_over: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size =
            (board_size - 2.0 * BOARD_MARGIN - (BOARD_SIZE as f32 - 1.0) * CELL_GAP)
                / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Board background
        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        // Cells and marks
        for idx in 0..TOTAL_CELLS {
            let rect = self.cell_rect(idx);
            let taken = !board.is_empty(idx);
            let fill = if taken { CELL_BG_TAKEN } else { CELL_BG };
            painter.rect_filled(rect, CornerRadius::same(6), fill);

            match board.get(idx) {
                Mark::X => self.draw_x(&painter, rect),
                Mark::O => self.draw_o(&painter, rect),
                Mark::Empty => {}
            }
        }

        // Last move marker
        if let Some(idx) = last_move {
            let rect = self.cell_rect(idx);
            painter.rect_stroke(
                rect,
                CornerRadius::same(6),
                Stroke::new(2.0, LAST_MOVE_MARKER),
                egui::StrokeKind::Inside,
            );
        }

        // Winning line highlight
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Hover preview and click
        let mut clicked_cell = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(idx) = self.screen_to_cell(pointer_pos) {
                    if board.is_empty(idx) {
                        self.draw_hover_preview(&painter, idx, current_turn);

                        if response.clicked() {
                            clicked_cell = Some(idx);
                        }
                    }
                }
            }
        }

        clicked_cell
    }

    /// Draw an X mark as two diagonal strokes
    fn draw_x(&self, painter: &Painter, rect: Rect) {
        let inset = self.cell_size * (0.5 - MARK_RADIUS_RATIO);
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, X_COLOR);
        let inner = rect.shrink(inset);

        painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
        painter.line_segment([inner.right_top(), inner.left_bottom()], stroke);
    }

    /// Draw an O mark as a circle stroke
    fn draw_o(&self, painter: &Painter, rect: Rect) {
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, O_COLOR);
        painter.circle_stroke(rect.center(), self.cell_size * MARK_RADIUS_RATIO, stroke);
    }

    /// Draw the strike through the three winning cells
    fn draw_winning_line(&self, painter: &Painter, line: [usize; 3]) {
        let stroke = Stroke::new(5.0, WIN_HIGHLIGHT);
        let start = self.cell_rect(line[0]).center();
        let end = self.cell_rect(line[2]).center();
        painter.line_segment([start, end], stroke);

        for idx in line {
            let rect = self.cell_rect(idx);
            painter.rect_stroke(
                rect,
                CornerRadius::same(6),
                Stroke::new(3.0, WIN_HIGHLIGHT),
                egui::StrokeKind::Inside,
            );
        }
    }

    /// Draw a faint preview of the active mark under the pointer
    fn draw_hover_preview(&self, painter: &Painter, idx: usize, turn: Mark) {
        let rect = self.cell_rect(idx);
        match turn {
            Mark::X => {
                let inset = self.cell_size * (0.5 - MARK_RADIUS_RATIO);
                let stroke = Stroke::new(
                    self.cell_size * MARK_STROKE_RATIO,
                    hover_preview(X_COLOR),
                );
                let inner = rect.shrink(inset);
                painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
                painter.line_segment([inner.right_top(), inner.left_bottom()], stroke);
            }
            Mark::O => {
                let stroke = Stroke::new(
                    self.cell_size * MARK_STROKE_RATIO,
                    hover_preview(O_COLOR),
                );
                painter.circle_stroke(
                    rect.center(),
                    self.cell_size * MARK_RADIUS_RATIO,
                    stroke,
                );
            }
            Mark::Empty => {}
        }
    }

    /// Screen rect of a cell
    fn cell_rect(&self, idx: usize) -> Rect {
        let pos = Pos::from_index(idx);
        let x = self.board_rect.min.x
            + BOARD_MARGIN
            + pos.col as f32 * (self.cell_size + CELL_GAP);
        let y = self.board_rect.min.y
            + BOARD_MARGIN
            + pos.row as f32 * (self.cell_size + CELL_GAP);
        Rect::from_min_size(Pos2::new(x, y), Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a cell index
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<usize> {
        for idx in 0..TOTAL_CELLS {
            if self.cell_rect(idx).contains(screen_pos) {
                return Some(idx);
            }
        }
        None
    }
}
