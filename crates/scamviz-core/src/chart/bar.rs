// File: crates/scamviz-core/src/chart/bar.rs
// Summary: Categorical bar chart with hover/selection states and tooltip.

use crate::aggregate::CategoryGroup;
use crate::event::{Selection, SelectionEvent, SelectionListener};
use crate::geometry::RectF;
use crate::scale::{BandScale, LinearScale};
use crate::surface::{Surface, TextAnchor};
use crate::theme::Theme;
use crate::types::{Insets, Viewport};

use super::{draw_notice, format_amount, MarkState, PointerEvent, Tooltip};

const INSETS: Insets = Insets::new(80.0, 50.0, 30.0, 150.0);
const BAND_PADDING: f32 = 0.2;
const Y_TICKS: usize = 6;

/// One bar per aggregated level-2 group, height proportional to total
/// amount, colored by stable group position.
pub struct BarChart {
    groups: Vec<CategoryGroup>,
    viewport: Viewport,
    x: BandScale,
    y: LinearScale,
    states: Vec<MarkState>,
    hovered: Option<usize>,
    tooltip: Tooltip,
}

impl BarChart {
    pub fn new(groups: Vec<CategoryGroup>, viewport: Viewport) -> Self {
        let (x, y) = build_scales(&groups, &viewport);
        let states = vec![MarkState::Idle; groups.len()];
        Self {
            groups,
            viewport,
            x,
            y,
            states,
            hovered: None,
            tooltip: Tooltip::default(),
        }
    }

    /// Replace the aggregated data wholesale (dataset filter change).
    /// All interaction state is dropped with the old groups.
    pub fn set_groups(&mut self, groups: Vec<CategoryGroup>) {
        let (x, y) = build_scales(&groups, &self.viewport);
        self.states = vec![MarkState::Idle; groups.len()];
        self.groups = groups;
        self.x = x;
        self.y = y;
        self.hovered = None;
        self.tooltip.hide();
    }

    /// Re-range both scales for a new viewport. Interaction state survives.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let plot = viewport.plot(&INSETS);
        self.x.set_range(plot.left, plot.right);
        self.y.set_range(plot.bottom, plot.top);
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn x_scale(&self) -> &BandScale {
        &self.x
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Interaction state of the bar for `key`.
    pub fn state_of(&self, key: &str) -> Option<MarkState> {
        self.groups
            .iter()
            .position(|g| g.key == key)
            .map(|i| self.states[i])
    }

    /// Pixel rectangle of the bar for `key`.
    pub fn bar_rect(&self, key: &str) -> Option<RectF> {
        self.groups
            .iter()
            .position(|g| g.key == key)
            .and_then(|i| self.bar_rect_at(i))
    }

    fn bar_rect_at(&self, index: usize) -> Option<RectF> {
        let group = self.groups.get(index)?;
        let left = self.x.position_at(index)?;
        let top = self.y.to_px(group.total_amount);
        let bottom = self.viewport.plot(&INSETS).bottom;
        Some(RectF::from_ltrb(left, top, left + self.x.bandwidth(), bottom))
    }

    /// Index of the bar under `(x, y)`, if any.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let index = self.x.hit(x)?;
        let rect = self.bar_rect_at(index)?;
        rect.contains(x, y).then_some(index)
    }

    /// Feed one pointer event. Clicks may produce a selection event for the
    /// bus; the visual state only changes once that event is delivered back
    /// through `on_selection`.
    pub fn pointer(&mut self, event: PointerEvent, selection: &Selection) -> Option<SelectionEvent> {
        match event {
            PointerEvent::Move { x, y } => {
                let hit = self.hit_test(x, y);
                if selection.selected().is_none() {
                    if hit != self.hovered {
                        if let Some(prev) = self.hovered {
                            if self.states[prev] == MarkState::Hovered {
                                self.states[prev] = MarkState::Idle;
                            }
                        }
                        if let Some(i) = hit {
                            self.states[i] = MarkState::Hovered;
                        }
                        self.hovered = hit;
                    }
                } else {
                    self.hovered = None;
                }
                match hit {
                    Some(i) => {
                        let group = &self.groups[i];
                        self.tooltip.show(
                            x,
                            y,
                            vec![
                                format!("Scam Type: {}", group.key),
                                format!("Total Lost: ${}", format_amount(group.total_amount)),
                            ],
                        );
                    }
                    None => self.tooltip.hide(),
                }
                None
            }
            PointerEvent::Leave => {
                if let Some(prev) = self.hovered.take() {
                    if self.states[prev] == MarkState::Hovered {
                        self.states[prev] = MarkState::Idle;
                    }
                }
                self.tooltip.hide();
                None
            }
            PointerEvent::Click { x, y } => {
                let index = self.hit_test(x, y)?;
                let key = &self.groups[index].key;
                if selection.is_selected(key) {
                    Some(SelectionEvent::Cleared)
                } else {
                    Some(SelectionEvent::Changed { category: key.clone() })
                }
            }
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, theme: &Theme) {
        surface.clear(theme.background);
        if self.groups.is_empty() {
            draw_notice(surface, theme);
            return;
        }
        let plot = self.viewport.plot(&INSETS);

        // Frame
        surface.stroke_line(plot.left, plot.bottom, plot.right, plot.bottom, 1.5, theme.axis_line);
        surface.stroke_line(plot.left, plot.top, plot.left, plot.bottom, 1.5, theme.axis_line);

        // Y ticks and labels
        for tick in self.y.ticks(Y_TICKS) {
            let py = self.y.to_px(tick);
            surface.stroke_line(plot.left - 4.0, py, plot.left, py, 1.0, theme.axis_line);
            surface.draw_text(
                &format_amount(tick),
                plot.left - 8.0,
                py + 4.0,
                12.0,
                theme.tick_label,
                TextAnchor::End,
            );
        }

        // X category labels
        for group in &self.groups {
            if let Some(cx) = self.x.center(&group.key) {
                surface.draw_text(
                    &group.key,
                    cx,
                    plot.bottom + 24.0,
                    14.0,
                    theme.tick_label,
                    TextAnchor::Middle,
                );
            }
        }

        // Axis titles
        surface.draw_text(
            "Scam Type",
            plot.right,
            plot.bottom + 48.0,
            14.0,
            theme.axis_label,
            TextAnchor::End,
        );
        surface.draw_text(
            "\u{2191} Amount (AUD)",
            4.0,
            18.0,
            14.0,
            theme.axis_label,
            TextAnchor::Start,
        );

        // Bars, at their interaction-state opacity
        for (i, _group) in self.groups.iter().enumerate() {
            if let Some(rect) = self.bar_rect_at(i) {
                let color = theme.category_color(i).with_opacity(self.states[i].opacity());
                surface.fill_rect(rect.left, rect.top, rect.width(), rect.height(), color);
            }
        }

        self.tooltip.render(surface, theme, &self.viewport);
    }
}

impl SelectionListener for BarChart {
    fn on_selection(&mut self, event: &SelectionEvent) {
        match event {
            SelectionEvent::Changed { category } => {
                for (i, group) in self.groups.iter().enumerate() {
                    self.states[i] = if group.key == *category {
                        MarkState::Selected
                    } else {
                        MarkState::Faded
                    };
                }
            }
            SelectionEvent::Cleared => {
                for state in &mut self.states {
                    *state = MarkState::Idle;
                }
            }
        }
        self.hovered = None;
    }
}

fn build_scales(groups: &[CategoryGroup], viewport: &Viewport) -> (BandScale, LinearScale) {
    let plot = viewport.plot(&INSETS);
    let keys = groups.iter().map(|g| g.key.clone()).collect();
    let x = BandScale::new(keys, plot.left, plot.right, BAND_PADDING);
    let max_amount = groups.iter().map(|g| g.total_amount).fold(0.0, f64::max);
    let y = LinearScale::new(0.0, max_amount, plot.bottom, plot.top).nice(Y_TICKS);
    (x, y)
}
