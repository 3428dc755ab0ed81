// File: crates/scamviz-core/src/surface.rs
// Summary: Renderer-agnostic drawing surface; primitives in, pixels out elsewhere.

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Scale the alpha channel by `opacity` in `[0, 1]`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// One draw call, as a backend must reproduce it.
///
/// Ring-sector angles are radians, measured clockwise from 12 o'clock.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Clear {
        color: Color,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        width: f32,
        color: Color,
    },
    Polyline {
        points: Vec<(f32, f32)>,
        width: f32,
        color: Color,
    },
    RingSector {
        cx: f32,
        cy: f32,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    },
}

/// Minimal drawing target. Chart logic emits primitives through this trait
/// and never touches a concrete renderer.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Color);
    fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: Color);
    #[allow(clippy::too_many_arguments)]
    fn fill_ring_sector(
        &mut self,
        cx: f32,
        cy: f32,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
    );
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color, anchor: TextAnchor);
}

/// Capture backend: records every primitive instead of rasterizing.
/// Lets chart behavior be asserted without any rendering target.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Primitive>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of filled rectangles (bars, tooltip boxes).
    pub fn rect_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Primitive::Rect { .. }))
            .count()
    }

    /// All drawn text runs, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, color: Color) {
        self.ops.push(Primitive::Clear { color });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(Primitive::Rect { x, y, width, height, color });
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Color) {
        self.ops.push(Primitive::Line { x0, y0, x1, y1, width, color });
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: Color) {
        self.ops.push(Primitive::Polyline { points: points.to_vec(), width, color });
    }

    fn fill_ring_sector(
        &mut self,
        cx: f32,
        cy: f32,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
    ) {
        self.ops.push(Primitive::RingSector {
            cx,
            cy,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color, anchor: TextAnchor) {
        self.ops.push(Primitive::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
            anchor,
        });
    }
}
