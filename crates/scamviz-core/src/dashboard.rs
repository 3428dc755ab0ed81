// File: crates/scamviz-core/src/dashboard.rs
// Summary: Owns the dataset, filter, selection bus, and the linked charts.

use crate::aggregate::{aggregate, yearly_totals, TOP_GROUPS};
use crate::chart::bar::BarChart;
use crate::chart::line::LineChart;
use crate::chart::sunburst::SunburstChart;
use crate::chart::PointerEvent;
use crate::dataset::{ScamRecord, YearFilter};
use crate::event::{Selection, SelectionBus, SelectionListener};
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::Viewport;

/// Which chart a pointer event is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartTarget {
    Bar,
    Sunburst,
}

/// The linked-chart dashboard.
///
/// Owns the raw records; every filter change re-aggregates wholesale and the
/// charts receive fresh, independently-owned group sequences. Charts talk to
/// each other only through the selection bus, bar first then sunburst.
pub struct Dashboard {
    records: Vec<ScamRecord>,
    filter: YearFilter,
    bus: SelectionBus,
    theme: Theme,
    viewport: Viewport,
    bar: BarChart,
    sunburst: SunburstChart,
    line: LineChart,
}

impl Dashboard {
    pub fn new(records: Vec<ScamRecord>, viewport: Viewport, theme: Theme) -> Self {
        let groups = aggregate(&records, TOP_GROUPS);
        log::info!(
            "dashboard initialised: {} records, {} chart groups",
            records.len(),
            groups.len()
        );
        let bar = BarChart::new(groups.clone(), viewport);
        let sunburst = SunburstChart::new(groups, viewport);
        let line = LineChart::new(yearly_totals(&records), viewport);
        Self {
            records,
            filter: YearFilter::All,
            bus: SelectionBus::new(),
            theme,
            viewport,
            bar,
            sunburst,
            line,
        }
    }

    pub fn year_filter(&self) -> YearFilter {
        self.filter
    }

    pub fn selection(&self) -> &Selection {
        self.bus.selection()
    }

    pub fn bar(&self) -> &BarChart {
        &self.bar
    }

    pub fn sunburst(&self) -> &SunburstChart {
        &self.sunburst
    }

    pub fn line(&self) -> &LineChart {
        &self.line
    }

    /// Re-aggregate for `filter` and rebuild the bar and sunburst charts.
    /// The line chart keeps the full history; the selection is reset.
    pub fn set_year_filter(&mut self, filter: YearFilter) {
        self.filter = filter;
        let filtered = filter.apply(&self.records);
        log::info!("year filter {filter}: {} of {} records", filtered.len(), self.records.len());
        let groups = aggregate(&filtered, TOP_GROUPS);
        self.bus.reset();
        self.bar.set_groups(groups.clone());
        self.sunburst.set_groups(groups);
    }

    /// Route pointer input to the addressed chart; any produced selection
    /// event is broadcast to both linked charts before this returns.
    pub fn pointer(&mut self, target: ChartTarget, event: PointerEvent) {
        let Dashboard { bus, bar, sunburst, .. } = self;
        let produced = match target {
            ChartTarget::Bar => bar.pointer(event, bus.selection()),
            ChartTarget::Sunburst => sunburst.pointer(event, bus.selection()),
        };
        if let Some(selection_event) = produced {
            bus.publish(
                selection_event,
                &mut [
                    bar as &mut dyn SelectionListener,
                    sunburst as &mut dyn SelectionListener,
                ],
            );
        }
    }

    /// Recompute layout from the container box (height floor applied) and
    /// re-range every chart in place. Selection state is untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::from_container(width, height);
        self.bar.resize(self.viewport);
        self.sunburst.resize(self.viewport);
        self.line.resize(self.viewport);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn render_bar(&self, surface: &mut dyn Surface) {
        self.bar.render(surface, &self.theme);
    }

    pub fn render_sunburst(&self, surface: &mut dyn Surface) {
        self.sunburst.render(surface, &self.theme);
    }

    pub fn render_line(&self, surface: &mut dyn Surface) {
        self.line.render(surface, &self.theme);
    }
}
