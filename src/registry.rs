//! Chart kind registry
//!
//! Maps the interactive menu keys `1`..`8` onto the generator functions and
//! carries the per-kind metadata the rest of the tool needs: display name,
//! Chart.js type tag, and default element count.

use std::fmt;

use crate::dataset::ChartData;
use crate::errors::{ChartGenError, Result};
use crate::generate;

/// The eight supported chart kinds, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Radar,
    Scatter,
    Bubble,
    Area,
    Doughnut,
}

impl ChartKind {
    /// All kinds in menu order, keyed `1`..`8`
    pub const ALL: [ChartKind; 8] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Radar,
        ChartKind::Scatter,
        ChartKind::Bubble,
        ChartKind::Area,
        ChartKind::Doughnut,
    ];

    /// Resolve a menu key. Accepts exactly `"1"`..`"8"`; everything else is
    /// an invalid selection.
    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            "1" => Ok(ChartKind::Line),
            "2" => Ok(ChartKind::Bar),
            "3" => Ok(ChartKind::Pie),
            "4" => Ok(ChartKind::Radar),
            "5" => Ok(ChartKind::Scatter),
            "6" => Ok(ChartKind::Bubble),
            "7" => Ok(ChartKind::Area),
            "8" => Ok(ChartKind::Doughnut),
            other => Err(ChartGenError::InvalidSelection {
                input: other.to_string(),
            }),
        }
    }

    /// Lenient resolution for the `--chart` flag: menu key, kind word
    /// (`"line"`), or display name (`"Line Chart"`), case-insensitive
    pub fn parse(input: &str) -> Result<Self> {
        let needle = input.trim();
        if let Ok(kind) = Self::from_key(needle) {
            return Ok(kind);
        }
        let lower = needle.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| {
                let name = kind.display_name().to_ascii_lowercase();
                name == lower || name.strip_suffix(" chart") == Some(lower.as_str())
            })
            .ok_or_else(|| ChartGenError::InvalidSelection {
                input: needle.to_string(),
            })
    }

    /// Menu key for this kind
    pub fn key(self) -> &'static str {
        match self {
            ChartKind::Line => "1",
            ChartKind::Bar => "2",
            ChartKind::Pie => "3",
            ChartKind::Radar => "4",
            ChartKind::Scatter => "5",
            ChartKind::Bubble => "6",
            ChartKind::Area => "7",
            ChartKind::Doughnut => "8",
        }
    }

    /// Human-readable name shown in the menu and the preview page title
    pub fn display_name(self) -> &'static str {
        match self {
            ChartKind::Line => "Line Chart",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Radar => "Radar Chart",
            ChartKind::Scatter => "Scatter Chart",
            ChartKind::Bubble => "Bubble Chart",
            ChartKind::Area => "Area Chart",
            ChartKind::Doughnut => "Doughnut Chart",
        }
    }

    /// Chart.js `type` tag. Area charts are drawn as `line` with `fill: true`.
    pub fn library_type(self) -> &'static str {
        match self {
            ChartKind::Line | ChartKind::Area => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Radar => "radar",
            ChartKind::Scatter => "scatter",
            ChartKind::Bubble => "bubble",
            ChartKind::Doughnut => "doughnut",
        }
    }

    /// Element count used when the caller does not override it
    pub fn default_count(self) -> usize {
        match self {
            ChartKind::Line | ChartKind::Area => 7,
            ChartKind::Scatter => 20,
            ChartKind::Bubble => 15,
            ChartKind::Bar | ChartKind::Pie | ChartKind::Radar | ChartKind::Doughnut => 5,
        }
    }

    /// Generate a dataset of this kind with `count` elements, falling back to
    /// [`default_count`](Self::default_count) when `count` is `None`
    pub fn generate(self, count: Option<usize>) -> ChartData {
        let count = count.unwrap_or_else(|| self.default_count());
        match self {
            ChartKind::Line => generate::line(count),
            ChartKind::Bar => generate::bar(count),
            ChartKind::Pie => generate::pie(count),
            ChartKind::Radar => generate::radar(count),
            ChartKind::Scatter => generate::scatter(count),
            ChartKind::Bubble => generate::bubble(count),
            ChartKind::Area => generate::area(count),
            ChartKind::Doughnut => generate::doughnut(count),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
