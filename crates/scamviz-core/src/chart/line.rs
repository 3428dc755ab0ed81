// File: crates/scamviz-core/src/chart/line.rs
// Summary: Yearly-totals line chart; always shows the full history.

use crate::scale::LinearScale;
use crate::surface::{Surface, TextAnchor};
use crate::theme::Theme;
use crate::types::{Insets, Viewport};

use super::{draw_notice, format_amount};

const INSETS: Insets = Insets::new(80.0, 50.0, 30.0, 60.0);
const Y_TICKS: usize = 6;

/// Total reported amount per year. Not on the selection bus (it has no
/// categorical marks) and unaffected by the year filter.
pub struct LineChart {
    points: Vec<(i32, f64)>,
    viewport: Viewport,
    x: LinearScale,
    y: LinearScale,
}

impl LineChart {
    /// `points` must be ascending by year (as produced by `yearly_totals`).
    pub fn new(points: Vec<(i32, f64)>, viewport: Viewport) -> Self {
        let (x, y) = build_scales(&points, &viewport);
        Self { points, viewport, x, y }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let plot = viewport.plot(&INSETS);
        self.x.set_range(plot.left, plot.right);
        self.y.set_range(plot.bottom, plot.top);
    }

    pub fn points(&self) -> &[(i32, f64)] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn render(&self, surface: &mut dyn Surface, theme: &Theme) {
        surface.clear(theme.background);
        if self.points.is_empty() {
            draw_notice(surface, theme);
            return;
        }
        let plot = self.viewport.plot(&INSETS);

        // Horizontal grid plus y labels
        for tick in self.y.ticks(Y_TICKS) {
            let py = self.y.to_px(tick);
            surface.stroke_line(plot.left, py, plot.right, py, 1.0, theme.grid);
            surface.draw_text(
                &format_amount(tick),
                plot.left - 8.0,
                py + 4.0,
                12.0,
                theme.tick_label,
                TextAnchor::End,
            );
        }

        // Frame
        surface.stroke_line(plot.left, plot.bottom, plot.right, plot.bottom, 1.5, theme.axis_line);
        surface.stroke_line(plot.left, plot.top, plot.left, plot.bottom, 1.5, theme.axis_line);

        // Year ticks along the x axis
        for &(year, _) in &self.points {
            let px = self.x.to_px(year as f64);
            surface.stroke_line(px, plot.bottom, px, plot.bottom + 4.0, 1.0, theme.axis_line);
            surface.draw_text(
                &year.to_string(),
                px,
                plot.bottom + 20.0,
                12.0,
                theme.tick_label,
                TextAnchor::Middle,
            );
        }

        // Axis titles
        surface.draw_text("Year", plot.right, plot.bottom + 40.0, 14.0, theme.axis_label, TextAnchor::End);
        surface.draw_text(
            "\u{2191} Amount (AUD)",
            4.0,
            18.0,
            14.0,
            theme.axis_label,
            TextAnchor::Start,
        );

        let path: Vec<(f32, f32)> = self
            .points
            .iter()
            .map(|&(year, total)| (self.x.to_px(year as f64), self.y.to_px(total)))
            .collect();
        surface.stroke_polyline(&path, 2.0, theme.line_stroke);
    }
}

fn build_scales(points: &[(i32, f64)], viewport: &Viewport) -> (LinearScale, LinearScale) {
    let plot = viewport.plot(&INSETS);
    let (min_year, max_year) = match (points.first(), points.last()) {
        (Some(&(first, _)), Some(&(last, _))) => (first as f64, last as f64),
        _ => (0.0, 1.0),
    };
    let x = LinearScale::new(min_year, max_year, plot.left, plot.right);
    let max_total = points.iter().map(|&(_, total)| total).fold(0.0, f64::max);
    let y = LinearScale::new(0.0, max_total, plot.bottom, plot.top).nice(Y_TICKS);
    (x, y)
}
