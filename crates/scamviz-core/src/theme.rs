// File: crates/scamviz-core/src/theme.rs
// Summary: Light/Dark theming and the categorical palette for chart colors.

use crate::surface::Color;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick_label: Color,
    pub grid: Color,
    /// "No data" notice text.
    pub notice: Color,
    pub tooltip_fill: Color,
    pub tooltip_border: Color,
    pub tooltip_text: Color,
    pub line_stroke: Color,
    /// Single fill used by the word-frequency bars.
    pub word_bar: Color,
    /// Categorical palette, keyed by group position.
    pub palette: Vec<Color>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(250, 250, 252),
            axis_line: Color::rgb(60, 60, 70),
            axis_label: Color::rgb(20, 20, 30),
            tick_label: Color::rgb(70, 70, 80),
            grid: Color::rgb(230, 230, 235),
            notice: Color::rgb(200, 40, 40),
            tooltip_fill: Color::rgb(255, 255, 255),
            tooltip_border: Color::rgb(221, 221, 221),
            tooltip_text: Color::rgb(30, 30, 40),
            line_stroke: Color::rgb(32, 120, 200),
            word_bar: Color::rgb(0x69, 0xb3, 0xa2),
            palette: categorical_palette(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(235, 235, 245),
            tick_label: Color::rgb(150, 150, 160),
            grid: Color::rgb(40, 40, 45),
            notice: Color::rgb(235, 90, 90),
            tooltip_fill: Color::rgb(32, 32, 36),
            tooltip_border: Color::rgb(70, 70, 78),
            tooltip_text: Color::rgb(235, 235, 245),
            line_stroke: Color::rgb(64, 160, 255),
            word_bar: Color::rgb(0x69, 0xb3, 0xa2),
            palette: categorical_palette(),
        }
    }

    /// Palette color for the group at `index`; wraps past the palette end.
    pub fn category_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Fixed rainbow-spread palette shared by the bar and sunburst charts so a
/// category keeps one hue across both.
fn categorical_palette() -> Vec<Color> {
    vec![
        Color::rgb(230, 57, 70),
        Color::rgb(244, 162, 97),
        Color::rgb(42, 157, 143),
        Color::rgb(69, 123, 157),
        Color::rgb(106, 76, 156),
        Color::rgb(188, 71, 123),
        Color::rgb(233, 196, 106),
        Color::rgb(38, 70, 83),
    ]
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
