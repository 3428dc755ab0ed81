// File: crates/scamviz-core/src/chart/mod.rs
// Summary: Shared chart interaction types: pointer events, mark states, tooltip.

pub mod bar;
pub mod line;
pub mod sunburst;
pub mod word_freq;

use crate::geometry::clamp;
use crate::surface::{Surface, TextAnchor};
use crate::theme::Theme;
use crate::types::Viewport;

/// Pointer input in chart-local pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { x: f32, y: f32 },
    Click { x: f32, y: f32 },
    Leave,
}

/// Interaction state of one mark (a bar or a sunburst sector).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkState {
    Idle,
    Hovered,
    Selected,
    Faded,
}

impl MarkState {
    /// Fill opacity for this state.
    pub fn opacity(self) -> f32 {
        match self {
            MarkState::Idle => 0.7,
            MarkState::Hovered | MarkState::Selected => 0.95,
            MarkState::Faded => 0.2,
        }
    }
}

pub(crate) const NO_DATA_NOTICE: &str = "No data available for the selected year";

pub(crate) fn draw_notice(surface: &mut dyn Surface, theme: &Theme) {
    surface.draw_text(NO_DATA_NOTICE, 100.0, 100.0, 16.0, theme.notice, TextAnchor::Start);
}

/// Format an amount with thousands separators and no decimals.
/// Input is expected non-negative.
pub(crate) fn format_amount(value: f64) -> String {
    let digits = (value.round().max(0.0) as u64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const TOOLTIP_PADDING: f32 = 12.0;
const TOOLTIP_FONT_SIZE: f32 = 14.0;
const TOOLTIP_LINE_HEIGHT: f32 = 20.0;

/// Pointer-tracking tooltip overlay. Purely presentational: shown, moved,
/// and hidden during hover, carrying no state across renders.
#[derive(Clone, Debug, Default)]
pub struct Tooltip {
    visible: bool,
    x: f32,
    y: f32,
    lines: Vec<String>,
}

impl Tooltip {
    pub fn show(&mut self, x: f32, y: f32, lines: Vec<String>) {
        self.visible = true;
        self.x = x;
        self.y = y;
        self.lines = lines;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Draw the tooltip near the pointer, kept inside the viewport.
    pub fn render(&self, surface: &mut dyn Surface, theme: &Theme, viewport: &Viewport) {
        if !self.visible || self.lines.is_empty() {
            return;
        }
        let longest = self.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let width = longest as f32 * TOOLTIP_FONT_SIZE * 0.55 + TOOLTIP_PADDING * 2.0;
        let height = self.lines.len() as f32 * TOOLTIP_LINE_HEIGHT + TOOLTIP_PADDING * 2.0;

        let left = clamp(self.x + 15.0, 0.0, (viewport.width() - width).max(0.0));
        let top = clamp(self.y - 50.0, 0.0, (viewport.height() - height).max(0.0));

        surface.fill_rect(left, top, width, height, theme.tooltip_fill);
        let border = theme.tooltip_border;
        surface.stroke_line(left, top, left + width, top, 1.0, border);
        surface.stroke_line(left, top + height, left + width, top + height, 1.0, border);
        surface.stroke_line(left, top, left, top + height, 1.0, border);
        surface.stroke_line(left + width, top, left + width, top + height, 1.0, border);

        for (i, line) in self.lines.iter().enumerate() {
            surface.draw_text(
                line,
                left + TOOLTIP_PADDING,
                top + TOOLTIP_PADDING + TOOLTIP_LINE_HEIGHT * (i as f32 + 0.7),
                TOOLTIP_FONT_SIZE,
                theme.tooltip_text,
                TextAnchor::Start,
            );
        }
    }
}
