// File: crates/scamviz-demo/src/main.rs
// Summary: Headless demo: loads the CSV dataset and renders every chart to PNG,
// then walks the selection protocol and the year filter from the command line.

use anyhow::{Context, Result};
use scamviz_core::{
    ChartTarget, Dashboard, PointerEvent, Theme, Viewport, WordFrequency, WordFrequencyChart,
    YearFilter,
};
use scamviz_render_skia::SkiaSurface;

const WIDTH: i32 = 1024;
const HEIGHT: i32 = 640;

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/historical_scam.csv".to_string());
    let records = scamviz_core::load_csv(&path)
        .with_context(|| format!("loading dataset {path}"))?;
    log::info!("loaded {} records from {path}", records.len());

    let viewport = Viewport::from_container(WIDTH as f32, HEIGHT as f32);
    let mut dashboard = Dashboard::new(records, viewport, Theme::light());
    let out = std::path::PathBuf::from("target/out");

    render_all(&dashboard, &out, "")?;

    // Select the top category and export the synchronized highlight state.
    if let Some(top) = dashboard.bar().groups().first().map(|g| g.key.clone()) {
        let rect = dashboard
            .bar()
            .bar_rect(&top)
            .context("top group has no bar")?;
        let (x, y) = rect.center();
        dashboard.pointer(ChartTarget::Bar, PointerEvent::Click { x, y });
        log::info!("selected category {top:?}");
        render_all(&dashboard, &out, "_selected")?;
    }

    // Narrow to 2024, which rebuilds the bar and sunburst charts only.
    dashboard.set_year_filter(YearFilter::Year(2024));
    render_all(&dashboard, &out, "_2024")?;

    // Word-frequency chart over the detector's most common scam words.
    let words = vec![
        word("account", 31.0),
        word("urgent", 24.5),
        word("bank", 18.2),
        word("verify", 12.9),
        word("prize", 8.4),
        word("link", 4.9),
    ];
    let word_chart = WordFrequencyChart::new(words, viewport);
    let mut surface = SkiaSurface::new(WIDTH, HEIGHT)?;
    word_chart.render(&mut surface, &Theme::light());
    let path = out.join("word_freq.png");
    surface.write_png(&path)?;
    println!("Wrote {}", path.display());

    Ok(())
}

fn word(text: &str, frequency: f64) -> WordFrequency {
    WordFrequency { word: text.to_string(), frequency }
}

fn render_all(dashboard: &Dashboard, out: &std::path::Path, suffix: &str) -> Result<()> {
    let charts: [(&str, fn(&Dashboard, &mut SkiaSurface)); 3] = [
        ("bar", |d, s| d.render_bar(s)),
        ("sunburst", |d, s| d.render_sunburst(s)),
        ("line", |d, s| d.render_line(s)),
    ];
    for (name, render) in charts {
        let mut surface = SkiaSurface::new(WIDTH, HEIGHT)?;
        render(dashboard, &mut surface);
        let path = out.join(format!("{name}{suffix}.png"));
        surface.write_png(&path)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
