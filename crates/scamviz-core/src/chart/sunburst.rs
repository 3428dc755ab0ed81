// File: crates/scamviz-core/src/chart/sunburst.rs
// Summary: Two-ring sunburst over the category hierarchy, selection-linked.

use std::f32::consts::TAU;

use crate::aggregate::CategoryGroup;
use crate::event::{Selection, SelectionEvent, SelectionListener};
use crate::surface::{Surface, TextAnchor};
use crate::theme::Theme;
use crate::types::{Insets, Viewport};

use super::{draw_notice, format_amount, MarkState, PointerEvent, Tooltip};

const INSETS: Insets = Insets::new(30.0, 30.0, 30.0, 30.0);
/// Sectors narrower than this get no inline label.
const LABEL_MIN_SPAN: f32 = 0.35;

/// Radii of the hole, the level-2 ring, and the level-3 ring, plus center.
#[derive(Clone, Copy, Debug)]
struct Layout {
    cx: f32,
    cy: f32,
    hole: f32,
    mid: f32,
    outer: f32,
}

/// Angular span in radians, clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ArcSpan {
    start: f32,
    end: f32,
}

impl ArcSpan {
    fn mid(&self) -> f32 {
        (self.start + self.end) * 0.5
    }
    fn span(&self) -> f32 {
        self.end - self.start
    }
    fn contains(&self, angle: f32) -> bool {
        angle >= self.start && angle < self.end
    }
}

/// Inner ring: one sector per level-2 group; outer ring: its level-3
/// children nested inside the parent's angular span. Angles are
/// proportional to summed amount.
pub struct SunburstChart {
    groups: Vec<CategoryGroup>,
    arcs: Vec<ArcSpan>,
    states: Vec<MarkState>,
    hovered: Option<usize>,
    tooltip: Tooltip,
    viewport: Viewport,
}

impl SunburstChart {
    pub fn new(groups: Vec<CategoryGroup>, viewport: Viewport) -> Self {
        let arcs = compute_arcs(&groups);
        let states = vec![MarkState::Idle; groups.len()];
        Self {
            groups,
            arcs,
            states,
            hovered: None,
            tooltip: Tooltip::default(),
            viewport,
        }
    }

    pub fn set_groups(&mut self, groups: Vec<CategoryGroup>) {
        self.arcs = compute_arcs(&groups);
        self.states = vec![MarkState::Idle; groups.len()];
        self.groups = groups;
        self.hovered = None;
        self.tooltip.hide();
    }

    /// Recenters and rescales on the new viewport; selection state survives.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn state_of(&self, key: &str) -> Option<MarkState> {
        self.groups
            .iter()
            .position(|g| g.key == key)
            .map(|i| self.states[i])
    }

    fn layout(&self) -> Layout {
        let plot = self.viewport.plot(&INSETS);
        let radius = (plot.width().min(plot.height()) * 0.5).max(1.0);
        let (cx, cy) = plot.center();
        Layout {
            cx,
            cy,
            hole: radius / 3.0,
            mid: radius * 2.0 / 3.0,
            outer: radius,
        }
    }

    /// Centroid of the level-2 sector for `key` (label anchor).
    pub fn centroid(&self, key: &str) -> Option<(f32, f32)> {
        let index = self.groups.iter().position(|g| g.key == key)?;
        let layout = self.layout();
        let angle = self.arcs[index].mid();
        let radius = (layout.hole + layout.mid) * 0.5;
        Some((
            layout.cx + radius * angle.sin(),
            layout.cy - radius * angle.cos(),
        ))
    }

    /// Sector under `(x, y)`: group index plus the child index when the hit
    /// lands on the outer ring.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<(usize, Option<usize>)> {
        let layout = self.layout();
        let dx = x - layout.cx;
        let dy = y - layout.cy;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < layout.hole || dist > layout.outer {
            return None;
        }
        let mut angle = dx.atan2(-dy);
        if angle < 0.0 {
            angle += TAU;
        }
        let group = self.arcs.iter().position(|arc| arc.contains(angle))?;
        if dist <= layout.mid {
            return Some((group, None));
        }
        let child = child_spans(&self.groups[group], &self.arcs[group])
            .iter()
            .position(|span| span.contains(angle));
        Some((group, child))
    }

    /// Same toggle protocol as bar clicks; outer-ring clicks act on the
    /// parent level-2 key.
    pub fn pointer(&mut self, event: PointerEvent, selection: &Selection) -> Option<SelectionEvent> {
        match event {
            PointerEvent::Move { x, y } => {
                let hit = self.hit_test(x, y);
                let group_hit = hit.map(|(g, _)| g);
                if selection.selected().is_none() {
                    if group_hit != self.hovered {
                        if let Some(prev) = self.hovered {
                            if self.states[prev] == MarkState::Hovered {
                                self.states[prev] = MarkState::Idle;
                            }
                        }
                        if let Some(i) = group_hit {
                            self.states[i] = MarkState::Hovered;
                        }
                        self.hovered = group_hit;
                    }
                } else {
                    self.hovered = None;
                }
                match hit {
                    Some((g, None)) => {
                        let group = &self.groups[g];
                        self.tooltip.show(
                            x,
                            y,
                            vec![
                                format!("Scam Type: {}", group.key),
                                format!("Total Lost: ${}", format_amount(group.total_amount)),
                            ],
                        );
                    }
                    Some((g, Some(c))) => {
                        let child = &self.groups[g].children[c];
                        self.tooltip.show(
                            x,
                            y,
                            vec![
                                format!("{}: {}", self.groups[g].key, child.key),
                                format!("Total Lost: ${}", format_amount(child.amount)),
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
                let (group, _) = self.hit_test(x, y)?;
                let key = &self.groups[group].key;
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
        let layout = self.layout();

        for (i, group) in self.groups.iter().enumerate() {
            let arc = self.arcs[i];
            let opacity = self.states[i].opacity();
            let color = theme.category_color(i);

            surface.fill_ring_sector(
                layout.cx,
                layout.cy,
                layout.hole,
                layout.mid,
                arc.start,
                arc.end,
                color.with_opacity(opacity),
            );
            for span in child_spans(group, &arc) {
                surface.fill_ring_sector(
                    layout.cx,
                    layout.cy,
                    layout.mid,
                    layout.outer,
                    span.start,
                    span.end,
                    color.with_opacity(opacity * 0.75),
                );
            }

            if arc.span() >= LABEL_MIN_SPAN {
                if let Some((lx, ly)) = self.centroid(&group.key) {
                    surface.draw_text(&group.key, lx, ly, 12.0, theme.axis_label, TextAnchor::Middle);
                }
            }
        }

        self.tooltip.render(surface, theme, &self.viewport);
    }
}

impl SelectionListener for SunburstChart {
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

/// Angular spans per group, proportional to total amount. Degenerate totals
/// fall back to equal spans so every group stays clickable.
fn compute_arcs(groups: &[CategoryGroup]) -> Vec<ArcSpan> {
    let total: f64 = groups.iter().map(|g| g.total_amount).sum();
    let mut arcs = Vec::with_capacity(groups.len());
    let mut start = 0.0f32;
    for group in groups {
        let fraction = if total > 0.0 {
            (group.total_amount / total) as f32
        } else {
            1.0 / groups.len() as f32
        };
        let end = start + TAU * fraction;
        arcs.push(ArcSpan { start, end });
        start = end;
    }
    arcs
}

/// Children spans nested inside the parent's arc, in child order.
fn child_spans(group: &CategoryGroup, arc: &ArcSpan) -> Vec<ArcSpan> {
    let mut spans = Vec::with_capacity(group.children.len());
    let mut start = arc.start;
    for child in &group.children {
        let fraction = if group.total_amount > 0.0 {
            (child.amount / group.total_amount) as f32
        } else {
            1.0 / group.children.len().max(1) as f32
        };
        let end = start + arc.span() * fraction;
        spans.push(ArcSpan { start, end });
        start = end;
    }
    spans
}
