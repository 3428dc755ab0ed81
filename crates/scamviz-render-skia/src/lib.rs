// File: crates/scamviz-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of the core drawing surface.

use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use scamviz_core::surface::{Color, Surface, TextAnchor};

fn to_skia(color: Color) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint
}

fn stroke_paint(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(to_skia(color));
    paint
}

/// CPU raster surface backing one chart instance.
pub struct SkiaSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        Ok(Self { surface, width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Snapshot the surface as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the surface to a PNG file, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read back the pixels as tightly-packed RGBA8 plus dimensions and
    /// row stride in bytes. Used for windowed blitting.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, usize, usize, usize)> {
        let (w, h) = (self.width as usize, self.height as usize);
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; w * h * 4];
        let ok = self.surface.read_pixels(&info, &mut pixels, w * 4, (0, 0));
        if !ok {
            anyhow::bail!("failed to read surface pixels");
        }
        Ok((pixels, w, h, w * 4))
    }
}

impl Surface for SkiaSurface {
    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let paint = fill_paint(color);
        self.surface
            .canvas()
            .draw_rect(skia::Rect::from_xywh(x, y, width, height), &paint);
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Color) {
        let paint = stroke_paint(color, width);
        self.surface.canvas().draw_line((x0, y0), (x1, y1), &paint);
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to(points[0]);
        for &p in &points[1..] {
            path.line_to(p);
        }
        let paint = stroke_paint(color, width);
        self.surface.canvas().draw_path(&path, &paint);
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
        // Core angles are radians clockwise from 12 o'clock; Skia arcs are
        // degrees clockwise from 3 o'clock.
        let start_deg = start_angle.to_degrees() - 90.0;
        let sweep_deg = (end_angle - start_angle).to_degrees();

        let outer = skia::Rect::from_xywh(
            cx - outer_radius,
            cy - outer_radius,
            outer_radius * 2.0,
            outer_radius * 2.0,
        );
        let inner = skia::Rect::from_xywh(
            cx - inner_radius,
            cy - inner_radius,
            inner_radius * 2.0,
            inner_radius * 2.0,
        );

        let mut path = skia::Path::new();
        path.arc_to(outer, start_deg, sweep_deg, true);
        path.arc_to(inner, start_deg + sweep_deg, -sweep_deg, false);
        path.close();

        let paint = fill_paint(color);
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color, anchor: TextAnchor) {
        let mut font = skia::Font::default();
        font.set_size(size);
        let (advance, _bounds) = font.measure_str(text, None);
        let x = match anchor {
            TextAnchor::Start => x,
            TextAnchor::Middle => x - advance * 0.5,
            TextAnchor::End => x - advance,
        };
        let paint = fill_paint(color);
        self.surface.canvas().draw_str(text, (x, y), &font, &paint);
    }
}
