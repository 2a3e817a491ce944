//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const CELL_BG: Color32 = Color32::from_rgb(55, 58, 64);
pub const CELL_BG_TAKEN: Color32 = Color32::from_rgb(48, 50, 55);

// Mark colors
pub const X_COLOR: Color32 = Color32::from_rgb(97, 175, 239);
pub const O_COLOR: Color32 = Color32::from_rgb(224, 108, 117);

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 200, 60);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const BUTTON_ACTIVE: Color32 = Color32::from_rgb(60, 100, 70);

// Text colors
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 230, 235);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 162, 168);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 112, 118);
pub const STATUS_ACCENT: Color32 = Color32::from_rgb(120, 200, 130);

// Hover preview alpha
pub fn hover_preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 90)
}

// Layout
pub const CELL_GAP: f32 = 8.0;
pub const BOARD_MARGIN: f32 = 16.0;
pub const MARK_STROKE_RATIO: f32 = 0.09;
pub const MARK_RADIUS_RATIO: f32 = 0.30;
