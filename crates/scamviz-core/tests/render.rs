// File: crates/scamviz-core/tests/render.rs
// Purpose: Validate chart output through the recording surface: empty-data
// notices, bar placement, resize behavior, and tooltip drawing.

use scamviz_core::{
    aggregate, ChartTarget, Dashboard, LineChart, MarkState, PointerEvent, Primitive, Recorder,
    ScamRecord, Theme, Viewport, WordFrequency, WordFrequencyChart, YearFilter, TOP_GROUPS,
};

fn rec(year: i32, level2: &str, level3: &str, amount: f64, reports: u64) -> ScamRecord {
    ScamRecord {
        year,
        category_level2: level2.to_string(),
        category_level3: level3.to_string(),
        amount,
        report_count: reports,
    }
}

fn sample_records() -> Vec<ScamRecord> {
    vec![
        rec(2024, "Investment", "Crypto", 400.0, 9),
        rec(2024, "Phishing", "Email", 300.0, 7),
        rec(2023, "Romance", "Dating", 200.0, 5),
    ]
}

const NOTICE: &str = "No data available for the selected year";

#[test]
fn empty_bar_chart_renders_notice_and_no_bars() {
    let dash = Dashboard::new(Vec::new(), Viewport::default(), Theme::light());
    let mut recorder = Recorder::new();
    dash.render_bar(&mut recorder);

    assert!(recorder.texts().contains(&NOTICE));
    assert_eq!(recorder.rect_count(), 0);
}

#[test]
fn filtering_everything_out_switches_to_the_notice() {
    let mut dash = Dashboard::new(sample_records(), Viewport::default(), Theme::light());
    dash.set_year_filter(YearFilter::Year(1999));

    let mut recorder = Recorder::new();
    dash.render_bar(&mut recorder);
    assert!(recorder.texts().contains(&NOTICE));
    assert_eq!(recorder.rect_count(), 0);

    let mut recorder = Recorder::new();
    dash.render_sunburst(&mut recorder);
    assert!(recorder.texts().contains(&NOTICE));
}

#[test]
fn bar_chart_draws_one_rect_per_group() {
    let dash = Dashboard::new(sample_records(), Viewport::default(), Theme::light());
    let mut recorder = Recorder::new();
    dash.render_bar(&mut recorder);

    assert_eq!(recorder.rect_count(), dash.bar().groups().len());
    // Tooltip hidden: no extra rect, no tooltip text.
    assert!(!dash.bar().tooltip().is_visible());
}

#[test]
fn bar_heights_track_total_amount() {
    let dash = Dashboard::new(sample_records(), Viewport::default(), Theme::light());
    let investment = dash.bar().bar_rect("Investment").expect("bar exists");
    let romance = dash.bar().bar_rect("Romance").expect("bar exists");
    assert!(investment.height() > romance.height());
    // Bars share the x-axis baseline.
    assert_eq!(investment.bottom, romance.bottom);
}

#[test]
fn hover_tooltip_is_drawn_and_then_hidden() {
    let mut dash = Dashboard::new(sample_records(), Viewport::default(), Theme::light());
    let rect = dash.bar().bar_rect("Investment").expect("bar exists");
    let (x, y) = rect.center();
    dash.pointer(ChartTarget::Bar, PointerEvent::Move { x, y });

    let mut recorder = Recorder::new();
    dash.render_bar(&mut recorder);
    assert!(recorder.texts().iter().any(|t| t.contains("Scam Type: Investment")));
    assert!(recorder.texts().iter().any(|t| t.contains("Total Lost: $400")));

    dash.pointer(ChartTarget::Bar, PointerEvent::Leave);
    let mut recorder = Recorder::new();
    dash.render_bar(&mut recorder);
    assert!(!recorder.texts().iter().any(|t| t.contains("Total Lost")));
}

#[test]
fn resize_preserves_selection_and_rescales_bars() {
    let mut dash = Dashboard::new(sample_records(), Viewport::default(), Theme::light());
    let rect_before = dash.bar().bar_rect("Investment").expect("bar exists");
    let (x, y) = rect_before.center();
    dash.pointer(ChartTarget::Bar, PointerEvent::Click { x, y });
    assert_eq!(dash.bar().state_of("Investment"), Some(MarkState::Selected));

    dash.resize(1600.0, 900.0);

    // The selected bar stays the uniquely selected one.
    assert_eq!(dash.selection().selected(), Some("Investment"));
    assert_eq!(dash.bar().state_of("Investment"), Some(MarkState::Selected));
    assert_eq!(dash.bar().state_of("Phishing"), Some(MarkState::Faded));
    assert_eq!(dash.sunburst().state_of("Investment"), Some(MarkState::Selected));

    // And the geometry followed the new container.
    let rect_after = dash.bar().bar_rect("Investment").expect("bar exists");
    assert!(rect_after.width() > rect_before.width());
}

#[test]
fn resize_enforces_the_minimum_height() {
    let viewport = Viewport::from_container(800.0, 120.0);
    assert_eq!(viewport.height(), scamviz_core::MIN_HEIGHT);

    let mut dash = Dashboard::new(sample_records(), Viewport::default(), Theme::light());
    dash.resize(800.0, 120.0);
    assert_eq!(dash.viewport().height(), scamviz_core::MIN_HEIGHT);
}

#[test]
fn sunburst_draws_inner_and_outer_sectors() {
    let records = sample_records();
    let groups = aggregate(&records, TOP_GROUPS);
    let children: usize = groups.iter().map(|g| g.children.len()).sum();

    let dash = Dashboard::new(records, Viewport::default(), Theme::light());
    let mut recorder = Recorder::new();
    dash.render_sunburst(&mut recorder);

    let sectors = recorder
        .ops
        .iter()
        .filter(|op| matches!(op, Primitive::RingSector { .. }))
        .count();
    assert_eq!(sectors, groups.len() + children);
}

#[test]
fn line_chart_draws_one_polyline_over_all_years() {
    let dash = Dashboard::new(sample_records(), Viewport::default(), Theme::light());
    let mut recorder = Recorder::new();
    dash.render_line(&mut recorder);

    let polylines: Vec<&Primitive> = recorder
        .ops
        .iter()
        .filter(|op| matches!(op, Primitive::Polyline { .. }))
        .collect();
    assert_eq!(polylines.len(), 1);
    if let Primitive::Polyline { points, .. } = polylines[0] {
        assert_eq!(points.len(), dash.line().points().len());
    }
}

#[test]
fn line_chart_ignores_the_year_filter() {
    let mut dash = Dashboard::new(sample_records(), Viewport::default(), Theme::light());
    let years_before = dash.line().points().len();
    dash.set_year_filter(YearFilter::Year(2024));
    assert_eq!(dash.line().points().len(), years_before);
}

#[test]
fn empty_line_chart_renders_notice() {
    let chart = LineChart::new(Vec::new(), Viewport::default());
    let mut recorder = Recorder::new();
    chart.render(&mut recorder, &Theme::light());
    assert!(recorder.texts().contains(&NOTICE));
}

#[test]
fn word_chart_uses_percent_ticks_and_fixed_domain() {
    let rows = vec![
        WordFrequency { word: "account".to_string(), frequency: 31.0 },
        WordFrequency { word: "urgent".to_string(), frequency: 24.5 },
        WordFrequency { word: "verify".to_string(), frequency: 12.9 },
    ];
    let chart = WordFrequencyChart::new(rows, Viewport::default());
    let mut recorder = Recorder::new();
    chart.render(&mut recorder, &Theme::light());

    assert_eq!(recorder.rect_count(), 3);
    let texts = recorder.texts();
    assert!(texts.contains(&"0%"));
    assert!(texts.contains(&"50%"));
}

#[test]
fn word_chart_tooltip_follows_hover() {
    let rows = vec![WordFrequency { word: "prize".to_string(), frequency: 8.4 }];
    let mut chart = WordFrequencyChart::new(rows, Viewport::default());

    let left = chart.hit_test(0.0, 0.0); // far outside
    assert_eq!(left, None);

    // Probe the middle of the single band just above the baseline.
    let plot_bottom = Viewport::default().height() - 100.0;
    let mut found = false;
    for x in 0..Viewport::default().width() as usize {
        if chart.hit_test(x as f32, plot_bottom - 1.0).is_some() {
            chart.pointer(PointerEvent::Move { x: x as f32, y: plot_bottom - 1.0 });
            found = true;
            break;
        }
    }
    assert!(found, "a bar should be hit-testable");
    assert!(chart.tooltip().is_visible());

    chart.pointer(PointerEvent::Leave);
    assert!(!chart.tooltip().is_visible());
}

#[test]
fn empty_word_chart_renders_notice() {
    let chart = WordFrequencyChart::new(Vec::new(), Viewport::default());
    let mut recorder = Recorder::new();
    chart.render(&mut recorder, &Theme::light());
    assert!(recorder.texts().contains(&NOTICE));
    assert_eq!(recorder.rect_count(), 0);
}
