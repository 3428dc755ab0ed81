// File: crates/scamviz-window-demo/src/main.rs
// Summary: Windowed dashboard demo: bar chart and sunburst side by side with
// live cross-chart selection, hover tooltips, and resize handling.

use std::num::NonZeroU32;

use scamviz_core::{ChartTarget, Dashboard, PointerEvent, Theme, Viewport};
use scamviz_render_skia::SkiaSurface;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const START_WIDTH: f64 = 1280.0;
const START_HEIGHT: f64 = 640.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/historical_scam.csv".to_string());
    let records = scamviz_core::load_csv(&path)?;
    if records.is_empty() {
        log::error!("dataset {path} contains no usable rows");
    }

    // Each chart gets one half of the window.
    let mut dashboard = Dashboard::new(
        records,
        Viewport::from_container(START_WIDTH as f32 / 2.0, START_HEIGHT as f32),
        Theme::dark(),
    );

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Historical Scam Insights")
        .with_inner_size(winit::dpi::LogicalSize::new(START_WIDTH, START_HEIGHT))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    let mut cursor: Option<(f64, f64)> = None;
    let mut cursor_pane: Option<ChartTarget> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    dashboard.resize((size.width as f32 / 2.0).max(1.0), size.height as f32);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    let split = size.width as f64 / 2.0;
                    let (pane, local_x) = if position.x < split {
                        (ChartTarget::Bar, position.x)
                    } else {
                        (ChartTarget::Sunburst, position.x - split)
                    };
                    // Crossing the split counts as leaving the previous pane.
                    if let Some(prev) = cursor_pane {
                        if prev != pane {
                            dashboard.pointer(prev, PointerEvent::Leave);
                        }
                    }
                    cursor_pane = Some(pane);
                    dashboard.pointer(
                        pane,
                        PointerEvent::Move { x: local_x as f32, y: position.y as f32 },
                    );
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    cursor_pane = None;
                    dashboard.pointer(ChartTarget::Bar, PointerEvent::Leave);
                    dashboard.pointer(ChartTarget::Sunburst, PointerEvent::Leave);
                    window.request_redraw();
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left && state == ElementState::Pressed {
                        if let Some((cx, cy)) = cursor {
                            let split = size.width as f64 / 2.0;
                            let (pane, local_x) = if cx < split {
                                (ChartTarget::Bar, cx)
                            } else {
                                (ChartTarget::Sunburst, cx - split)
                            };
                            dashboard.pointer(
                                pane,
                                PointerEvent::Click { x: local_x as f32, y: cy as f32 },
                            );
                            log::debug!("selection now {:?}", dashboard.selection().selected());
                            window.request_redraw();
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&dashboard, &mut surface, size) {
                    log::error!("redraw failed: {e}");
                }
            }
            _ => {}
        }
    });
}

/// Render both charts to raster surfaces and blit them into the frame,
/// bar chart left, sunburst right.
fn draw(
    dashboard: &Dashboard,
    surface: &mut softbuffer::Surface,
    size: winit::dpi::PhysicalSize<u32>,
) -> anyhow::Result<()> {
    let w = size.width.max(1);
    let h = size.height.max(1);
    surface
        .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
        .ok();

    let viewport = dashboard.viewport();
    let pane_w = viewport.width() as i32;
    let pane_h = viewport.height() as i32;

    let mut bar = SkiaSurface::new(pane_w, pane_h)?;
    dashboard.render_bar(&mut bar);
    let (bar_px, bw, bh, _) = bar.rgba8()?;

    let mut sunburst = SkiaSurface::new(pane_w, pane_h)?;
    dashboard.render_sunburst(&mut sunburst);
    let (sun_px, sw, sh, _) = sunburst.rgba8()?;

    let mut frame = surface.buffer_mut().expect("frame");
    frame.fill(0);
    blit(&mut frame, w as usize, h as usize, &bar_px, bw, bh, 0);
    blit(&mut frame, w as usize, h as usize, &sun_px, sw, sh, w as usize / 2);
    frame.present().ok();
    Ok(())
}

/// Copy an RGBA8 pane into the ARGB frame at `dst_x`, clipping to the frame.
fn blit(
    frame: &mut [u32],
    frame_w: usize,
    frame_h: usize,
    pane: &[u8],
    pane_w: usize,
    pane_h: usize,
    dst_x: usize,
) {
    let rows = pane_h.min(frame_h);
    let cols = pane_w.min(frame_w.saturating_sub(dst_x));
    for y in 0..rows {
        for x in 0..cols {
            let src = (y * pane_w + x) * 4;
            let r = pane[src] as u32;
            let g = pane[src + 1] as u32;
            let b = pane[src + 2] as u32;
            let a = pane[src + 3] as u32;
            frame[y * frame_w + dst_x + x] = (a << 24) | (r << 16) | (g << 8) | b;
        }
    }
}
