pub mod bucket;
pub mod grid;
pub mod render;

pub use bucket::{aggregate, count_days_since, start_of_day, weekday_offset, DayBucket, OUT_OF_RANGE};
pub use grid::{build_grid, Grid, WeekColumn};
pub use render::{render_graph, AnsiCells, CellRenderer, PlainCells, Tier};

/// Window geometry of the graph. The defaults match the classic six-month
/// contribution graph; tests shrink the window to keep fixtures small.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// How many days back the graph reaches.
    pub window_days: usize,
    /// How many full weekly columns that window spans.
    pub weeks: usize,
}

impl GraphConfig {
    pub const SIX_MONTHS: GraphConfig = GraphConfig {
        window_days: 183,
        weeks: 26,
    };
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::SIX_MONTHS
    }
}
