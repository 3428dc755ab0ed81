// File: crates/scamviz-core/src/lib.rs
// Summary: Core library entry point; exports the dashboard building blocks.

pub mod aggregate;
pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod event;
pub mod geometry;
pub mod scale;
pub mod surface;
pub mod theme;
pub mod types;

pub use aggregate::{aggregate, yearly_totals, CategoryGroup, SubCategory, TOP_GROUPS};
pub use chart::bar::BarChart;
pub use chart::line::LineChart;
pub use chart::sunburst::SunburstChart;
pub use chart::word_freq::{WordFrequency, WordFrequencyChart};
pub use chart::{MarkState, PointerEvent, Tooltip};
pub use dashboard::{ChartTarget, Dashboard};
pub use dataset::{load_csv, read_records, DatasetError, ScamRecord, YearFilter};
pub use event::{Selection, SelectionBus, SelectionEvent, SelectionListener};
pub use scale::{BandScale, LinearScale};
pub use surface::{Color, Primitive, Recorder, Surface, TextAnchor};
pub use theme::Theme;
pub use types::{Insets, Viewport, MIN_HEIGHT};
