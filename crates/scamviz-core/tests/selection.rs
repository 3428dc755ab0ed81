// File: crates/scamviz-core/tests/selection.rs
// Purpose: Validate the cross-chart selection protocol end to end.

use std::cell::RefCell;
use std::rc::Rc;

use scamviz_core::{
    aggregate, ChartTarget, Dashboard, MarkState, PointerEvent, ScamRecord, SelectionBus,
    SelectionEvent, SelectionListener, Theme, Viewport, YearFilter, TOP_GROUPS,
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
        rec(2024, "Identity", "Documents", 100.0, 3),
    ]
}

fn dashboard() -> Dashboard {
    Dashboard::new(sample_records(), Viewport::default(), Theme::light())
}

fn click_bar(dashboard: &mut Dashboard, key: &str) {
    let rect = dashboard.bar().bar_rect(key).expect("bar exists");
    let (x, y) = rect.center();
    dashboard.pointer(ChartTarget::Bar, PointerEvent::Click { x, y });
}

#[test]
fn clicking_a_bar_selects_it_and_fades_the_rest() {
    let mut dash = dashboard();
    click_bar(&mut dash, "Phishing");

    assert_eq!(dash.selection().selected(), Some("Phishing"));
    assert_eq!(dash.bar().state_of("Phishing"), Some(MarkState::Selected));
    for key in ["Investment", "Romance", "Identity"] {
        assert_eq!(dash.bar().state_of(key), Some(MarkState::Faded));
    }
    // The peer chart observed the same broadcast.
    assert_eq!(dash.sunburst().state_of("Phishing"), Some(MarkState::Selected));
    assert_eq!(dash.sunburst().state_of("Investment"), Some(MarkState::Faded));
}

#[test]
fn selecting_a_second_bar_replaces_the_first() {
    let mut dash = dashboard();
    click_bar(&mut dash, "Investment");
    click_bar(&mut dash, "Phishing");

    assert_eq!(dash.selection().selected(), Some("Phishing"));
    assert_eq!(dash.bar().state_of("Phishing"), Some(MarkState::Selected));
    assert_eq!(dash.bar().state_of("Investment"), Some(MarkState::Faded));

    let selected_count = dash
        .bar()
        .groups()
        .iter()
        .filter(|g| dash.bar().state_of(&g.key) == Some(MarkState::Selected))
        .count();
    assert_eq!(selected_count, 1);
}

#[test]
fn clicking_the_selected_bar_clears_everywhere() {
    let mut dash = dashboard();
    click_bar(&mut dash, "Investment");
    click_bar(&mut dash, "Investment");

    assert_eq!(dash.selection().selected(), None);
    for key in ["Investment", "Phishing", "Romance", "Identity"] {
        assert_eq!(dash.bar().state_of(key), Some(MarkState::Idle));
        assert_eq!(dash.sunburst().state_of(key), Some(MarkState::Idle));
    }
}

#[test]
fn sunburst_clicks_drive_the_bar_chart() {
    let mut dash = dashboard();
    let (x, y) = dash.sunburst().centroid("Investment").expect("sector exists");
    dash.pointer(ChartTarget::Sunburst, PointerEvent::Click { x, y });

    assert_eq!(dash.selection().selected(), Some("Investment"));
    assert_eq!(dash.bar().state_of("Investment"), Some(MarkState::Selected));
    assert_eq!(dash.bar().state_of("Phishing"), Some(MarkState::Faded));

    // Clicking the same sector again clears both charts.
    dash.pointer(ChartTarget::Sunburst, PointerEvent::Click { x, y });
    assert_eq!(dash.selection().selected(), None);
    assert_eq!(dash.bar().state_of("Phishing"), Some(MarkState::Idle));
}

#[test]
fn external_broadcast_overrides_local_history() {
    let records = sample_records();
    let groups = aggregate(&records, TOP_GROUPS);
    let mut bar = scamviz_core::BarChart::new(groups, Viewport::default());
    let mut bus = SelectionBus::new();

    // No local click ever happened; a peer-originated event still lands.
    bus.publish(
        SelectionEvent::Changed { category: "Romance".to_string() },
        &mut [&mut bar as &mut dyn SelectionListener],
    );
    assert_eq!(bar.state_of("Romance"), Some(MarkState::Selected));
    assert_eq!(bar.state_of("Investment"), Some(MarkState::Faded));

    bus.publish(SelectionEvent::Cleared, &mut [&mut bar as &mut dyn SelectionListener]);
    assert_eq!(bar.state_of("Romance"), Some(MarkState::Idle));
}

#[test]
fn listeners_receive_events_in_registration_order() {
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }
    impl SelectionListener for Probe {
        fn on_selection(&mut self, _event: &SelectionEvent) {
            self.log.borrow_mut().push(self.name);
        }
    }

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut first = Probe { name: "first", log: Rc::clone(&log) };
    let mut second = Probe { name: "second", log: Rc::clone(&log) };
    let mut bus = SelectionBus::new();

    bus.publish(
        SelectionEvent::Changed { category: "Investment".to_string() },
        &mut [
            &mut first as &mut dyn SelectionListener,
            &mut second as &mut dyn SelectionListener,
        ],
    );
    // Delivery completes synchronously, in slice order.
    assert_eq!(*log.borrow(), vec!["first", "second"]);
    assert_eq!(bus.selection().selected(), Some("Investment"));
}

#[test]
fn filter_change_resets_the_selection() {
    let mut dash = dashboard();
    click_bar(&mut dash, "Investment");
    assert_eq!(dash.selection().selected(), Some("Investment"));

    dash.set_year_filter(YearFilter::Year(2024));
    assert_eq!(dash.selection().selected(), None);
    // Romance is 2023-only, so it fell out of the rebuilt charts.
    assert_eq!(dash.bar().state_of("Romance"), None);
    assert_eq!(dash.bar().state_of("Investment"), Some(MarkState::Idle));
}

#[test]
fn hover_is_local_and_reverts_on_leave() {
    let mut dash = dashboard();
    let rect = dash.bar().bar_rect("Phishing").expect("bar exists");
    let (x, y) = rect.center();

    dash.pointer(ChartTarget::Bar, PointerEvent::Move { x, y });
    assert_eq!(dash.bar().state_of("Phishing"), Some(MarkState::Hovered));
    assert!(dash.bar().tooltip().is_visible());
    // Hover never crosses the bus.
    assert_eq!(dash.sunburst().state_of("Phishing"), Some(MarkState::Idle));

    dash.pointer(ChartTarget::Bar, PointerEvent::Leave);
    assert_eq!(dash.bar().state_of("Phishing"), Some(MarkState::Idle));
    assert!(!dash.bar().tooltip().is_visible());
}

#[test]
fn hover_does_not_disturb_an_active_selection() {
    let mut dash = dashboard();
    click_bar(&mut dash, "Investment");

    let rect = dash.bar().bar_rect("Phishing").expect("bar exists");
    let (x, y) = rect.center();
    dash.pointer(ChartTarget::Bar, PointerEvent::Move { x, y });

    assert_eq!(dash.bar().state_of("Phishing"), Some(MarkState::Faded));
    assert_eq!(dash.bar().state_of("Investment"), Some(MarkState::Selected));
    // The tooltip still tracks the pointer.
    assert!(dash.bar().tooltip().is_visible());
}
