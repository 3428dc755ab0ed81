// File: crates/scamviz-core/src/chart/word_freq.rs
// Summary: Word-frequency bar chart with a fixed percentage domain.

use crate::scale::{BandScale, LinearScale};
use crate::surface::{Surface, TextAnchor};
use crate::theme::Theme;
use crate::types::{Insets, Viewport};

use super::{draw_notice, PointerEvent, Tooltip};

const INSETS: Insets = Insets::new(50.0, 50.0, 30.0, 100.0);
const BAND_PADDING: f32 = 0.2;
/// The Y axis always spans 0–50%.
const DOMAIN_MAX: f64 = 50.0;
const Y_TICKS: usize = 5;

/// One word with its frequency in percentage points.
#[derive(Clone, Debug, PartialEq)]
pub struct WordFrequency {
    pub word: String,
    pub frequency: f64,
}

/// Plain bar chart over word frequencies; tooltip only, no selection
/// protocol.
pub struct WordFrequencyChart {
    rows: Vec<WordFrequency>,
    viewport: Viewport,
    x: BandScale,
    y: LinearScale,
    tooltip: Tooltip,
}

impl WordFrequencyChart {
    pub fn new(rows: Vec<WordFrequency>, viewport: Viewport) -> Self {
        let (x, y) = build_scales(&rows, &viewport);
        Self {
            rows,
            viewport,
            x,
            y,
            tooltip: Tooltip::default(),
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let plot = viewport.plot(&INSETS);
        self.x.set_range(plot.left, plot.right);
        self.y.set_range(plot.bottom, plot.top);
    }

    pub fn rows(&self) -> &[WordFrequency] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Index of the bar under `(x, y)`, if any.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let index = self.x.hit(x)?;
        let row = &self.rows[index];
        let left = self.x.position_at(index)?;
        let top = self.y.to_px(row.frequency);
        let bottom = self.viewport.plot(&INSETS).bottom;
        (x >= left && x <= left + self.x.bandwidth() && y >= top && y <= bottom).then_some(index)
    }

    pub fn pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move { x, y } => match self.hit_test(x, y) {
                Some(i) => {
                    let row = &self.rows[i];
                    self.tooltip.show(
                        x,
                        y,
                        vec![
                            format!("Word: {}", row.word),
                            format!("Frequency: {}%", row.frequency),
                        ],
                    );
                }
                None => self.tooltip.hide(),
            },
            PointerEvent::Leave | PointerEvent::Click { .. } => self.tooltip.hide(),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, theme: &Theme) {
        surface.clear(theme.background);
        if self.rows.is_empty() {
            draw_notice(surface, theme);
            return;
        }
        let plot = self.viewport.plot(&INSETS);

        // Frame
        surface.stroke_line(plot.left, plot.bottom, plot.right, plot.bottom, 1.5, theme.axis_line);
        surface.stroke_line(plot.left, plot.top, plot.left, plot.bottom, 1.5, theme.axis_line);

        // Percent-formatted y ticks
        for tick in self.y.ticks(Y_TICKS) {
            let py = self.y.to_px(tick);
            surface.stroke_line(plot.left - 4.0, py, plot.left, py, 1.0, theme.axis_line);
            surface.draw_text(
                &format!("{tick:.0}%"),
                plot.left - 8.0,
                py + 4.0,
                12.0,
                theme.tick_label,
                TextAnchor::End,
            );
        }

        // Word labels
        for row in &self.rows {
            if let Some(cx) = self.x.center(&row.word) {
                surface.draw_text(
                    &row.word,
                    cx,
                    plot.bottom + 20.0,
                    12.0,
                    theme.tick_label,
                    TextAnchor::Middle,
                );
            }
        }

        // Bars, one shared fill
        for (i, row) in self.rows.iter().enumerate() {
            if let Some(left) = self.x.position_at(i) {
                let top = self.y.to_px(row.frequency);
                surface.fill_rect(
                    left,
                    top,
                    self.x.bandwidth(),
                    (plot.bottom - top).max(0.0),
                    theme.word_bar,
                );
            }
        }

        self.tooltip.render(surface, theme, &self.viewport);
    }
}

fn build_scales(rows: &[WordFrequency], viewport: &Viewport) -> (BandScale, LinearScale) {
    let plot = viewport.plot(&INSETS);
    let keys = rows.iter().map(|r| r.word.clone()).collect();
    let x = BandScale::new(keys, plot.left, plot.right, BAND_PADDING);
    let y = LinearScale::new(0.0, DOMAIN_MAX, plot.bottom, plot.top);
    (x, y)
}
