use super::bucket::{start_of_day, weekday_offset, DayBucket};
use super::grid::build_grid;
use super::GraphConfig;
use chrono::{DateTime, Datelike, Duration, Utc};
use console::Style;
use std::io::{self, Write};

/// Width of the day-name gutter on the left of the grid.
const DAY_LABEL_WIDTH: usize = 5;
/// Visible width of one rendered cell.
const CELL_WIDTH: usize = 4;

/// Visual intensity of a cell, derived from its commit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Zero,
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Tier::Zero,
            1..=4 => Tier::Low,
            5..=9 => Tier::Medium,
            _ => Tier::High,
        }
    }
}

/// Turns a tier into the styled text of one cell, so the grid logic stays
/// independent of the output medium. Implementations must keep the zero tier
/// visually distinct from the non-zero tiers.
pub trait CellRenderer {
    fn cell(&self, tier: Tier) -> String;

    /// Un-styled spacing of one cell width, used for days that have not
    /// happened yet.
    fn blank(&self) -> String {
        " ".repeat(CELL_WIDTH)
    }
}

/// Terminal backend: bold colored backgrounds, degrading to plain text when
/// the sink is not a terminal (console handles the detection).
pub struct AnsiCells;

impl CellRenderer for AnsiCells {
    fn cell(&self, tier: Tier) -> String {
        let style = match tier {
            Tier::Zero => Style::new().bold().black().on_white(),
            Tier::Low => Style::new().bold().black().on_yellow(),
            Tier::Medium => Style::new().bold().black().on_green(),
            Tier::High => Style::new().bold().black().on_red(),
        };
        format!(" {} ", style.apply_to("  "))
    }
}

/// Plain-text backend for dumb sinks and tests.
pub struct PlainCells;

impl CellRenderer for PlainCells {
    fn cell(&self, tier: Tier) -> String {
        let glyph = match tier {
            Tier::Zero => "..",
            Tier::Low => "░░",
            Tier::Medium => "▒▒",
            Tier::High => "██",
        };
        format!(" {glyph} ")
    }
}

/// Draw the whole graph for `bucket`: month labels, weekday rows, legend.
pub fn render_graph<C: CellRenderer, W: Write>(
    bucket: &DayBucket,
    now: DateTime<Utc>,
    cells: &C,
    out: &mut W,
) -> io::Result<()> {
    let config = bucket.config();
    print_months(config, now, out)?;
    print_cells(bucket, now, cells, out)?;
    print_legend(config, cells, out)?;
    Ok(())
}

/// One label per month transition, aligned to the week column where the
/// transition happens.
fn print_months<W: Write>(config: GraphConfig, now: DateTime<Utc>, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", " ".repeat(DAY_LABEL_WIDTH + CELL_WIDTH))?;

    let mut week = start_of_day(now) - Duration::days(config.window_days as i64);
    let mut month = week.month();
    loop {
        if week.month() != month {
            write!(out, "{} ", week.format("%b"))?;
            month = week.month();
        } else {
            write!(out, "{}", " ".repeat(CELL_WIDTH))?;
        }

        week += Duration::days(7);
        if week > now {
            break;
        }
    }
    writeln!(out)?;
    writeln!(out)
}

/// Weekday rows, Saturday on top, oldest week leftmost.
///
/// Week 0 is special: the row matching `offset - 1` is today and must render
/// exactly once, and rows past today hold days that have not happened yet,
/// drawn as un-styled blanks instead of real cells. On a Sunday run today's
/// key (7) lives in the week-1 column and renders there; the week-0 today
/// cell then reads past the six-entry column and falls back to zero.
fn print_cells<C: CellRenderer, W: Write>(
    bucket: &DayBucket,
    now: DateTime<Utc>,
    cells: &C,
    out: &mut W,
) -> io::Result<()> {
    let config = bucket.config();
    let grid = build_grid(bucket);
    let offset = weekday_offset(now.weekday());
    let mut today_row: Option<usize> = None;

    for j in (0..=6).rev() {
        for i in (0..=config.weeks + 1).rev() {
            if i == config.weeks + 1 {
                write!(out, "{}", day_label(j))?;
            }
            if let Some(col) = grid.get(&i) {
                if i == 0 {
                    if today_row.is_some_and(|today| j < today) {
                        write!(out, "{}", cells.blank())?;
                        continue;
                    }
                    if j + 1 == offset {
                        today_row = Some(j);
                        let count = col.get(j).copied().unwrap_or(0);
                        write!(out, "{}", cells.cell(Tier::from_count(count)))?;
                        continue;
                    }
                }
                if col.len() > j {
                    write!(out, "{}", cells.cell(Tier::from_count(col[j])))?;
                    continue;
                }
            }
            write!(out, "{}", cells.cell(Tier::Zero))?;
        }
        writeln!(out)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Day names for rows 1, 3 and 5 only; the rest get equal-width padding.
fn day_label(day: usize) -> &'static str {
    match day {
        1 => " Mon ",
        3 => " Wed ",
        5 => " Fri ",
        _ => "     ",
    }
}

fn print_legend<C: CellRenderer, W: Write>(
    config: GraphConfig,
    cells: &C,
    out: &mut W,
) -> io::Result<()> {
    let pad = " ".repeat(CELL_WIDTH * config.weeks.saturating_sub(3) + 3);
    write!(out, "{pad}Less ")?;
    for tier in [Tier::Zero, Tier::Low, Tier::Medium, Tier::High] {
        write!(out, "{}", cells.cell(tier))?;
    }
    writeln!(out, "More")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn render_plain(bucket: &DayBucket, now: DateTime<Utc>) -> Vec<String> {
        let mut out = Vec::new();
        render_graph(bucket, now, &PlainCells, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .split('\n')
            .map(str::to_string)
            .collect()
    }

    fn friday_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn saturday_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 16, 12, 0, 0).unwrap()
    }

    // Rows print top-down from j = 6, each followed by a spacer line, after
    // a leading blank line, the months line and another blank line.
    fn row_line(j: usize) -> usize {
        3 + 2 * (6 - j)
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(Tier::from_count(0), Tier::Zero);
        assert_eq!(Tier::from_count(1), Tier::Low);
        assert_eq!(Tier::from_count(4), Tier::Low);
        assert_eq!(Tier::from_count(5), Tier::Medium);
        assert_eq!(Tier::from_count(9), Tier::Medium);
        assert_eq!(Tier::from_count(10), Tier::High);
        assert_eq!(Tier::from_count(42), Tier::High);
    }

    #[test]
    fn month_labels_sit_on_transition_weeks() {
        let bucket = DayBucket::new(GraphConfig::SIX_MONTHS);
        let lines = render_plain(&bucket, friday_noon());

        // 183 days before 2024-03-15 is 2023-09-14; walking in 7-day steps,
        // the month changes at Oct 5, Nov 2, Dec 7, Jan 4, Feb 1 and Mar 7.
        let mut slots = vec!["    "; 27];
        slots[3] = "Oct ";
        slots[7] = "Nov ";
        slots[12] = "Dec ";
        slots[16] = "Jan ";
        slots[20] = "Feb ";
        slots[25] = "Mar ";
        let expected = format!("{}{}", " ".repeat(9), slots.concat());

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], expected);
        assert_eq!(lines[2], "");
    }

    #[test]
    fn day_labels_mark_mon_wed_fri() {
        let bucket = DayBucket::new(GraphConfig::SIX_MONTHS);
        let lines = render_plain(&bucket, friday_noon());

        assert!(lines[row_line(6)].starts_with("     "));
        assert!(lines[row_line(5)].starts_with(" Fri "));
        assert!(lines[row_line(3)].starts_with(" Wed "));
        assert!(lines[row_line(1)].starts_with(" Mon "));
        assert!(lines[row_line(0)].starts_with("     "));
    }

    #[test]
    fn empty_bucket_renders_only_zero_cells() {
        let bucket = DayBucket::new(GraphConfig::SIX_MONTHS);
        let lines = render_plain(&bucket, friday_noon());

        for j in 0..=6 {
            let row = &lines[row_line(j)];
            assert!(!row.contains('░') && !row.contains('▒') && !row.contains('█'));
            assert!(row.contains(" .. "));
        }
    }

    #[test]
    fn counted_days_round_trip_into_cells() {
        // Saturday run: offset 1, so today's row is j = 0 and today's count
        // comes from key 1.
        let mut bucket = DayBucket::new(GraphConfig::SIX_MONTHS);
        bucket.set(1, 3);
        bucket.set(8, 1);
        let lines = render_plain(&bucket, saturday_noon());

        // Key 1 renders as today, the rightmost cell of the bottom row.
        let today = &lines[row_line(0)];
        assert!(today.ends_with(" ░░ "));
        assert_eq!(today.matches("░░").count(), 1);

        // Key 8 renders at week 1, row 1, one cell left of week 0.
        let monday = &lines[row_line(1)];
        assert!(monday.ends_with(" ░░  .. "));
        assert_eq!(monday.matches("░░").count(), 1);

        // No other row holds a non-zero cell.
        for j in 2..=6 {
            assert!(!lines[row_line(j)].contains("░░"));
        }
    }

    #[test]
    fn today_renders_exactly_once() {
        // Friday run: offset 2, today's row is j = 1 and its count is key 2.
        let mut bucket = DayBucket::new(GraphConfig::SIX_MONTHS);
        bucket.set(2, 7);
        let lines = render_plain(&bucket, friday_noon());

        let grid_region = lines[3..=row_line(0)].join("\n");
        assert_eq!(grid_region.matches("▒▒").count(), 1);
        assert!(lines[row_line(1)].ends_with(" ▒▒ "));
    }

    #[test]
    fn rows_past_today_are_blank_not_cells() {
        let bucket = DayBucket::new(GraphConfig::SIX_MONTHS);
        let lines = render_plain(&bucket, friday_noon());

        // On a Friday, j = 0 (Sunday row) is in the future for week 0.
        let sunday = &lines[row_line(0)];
        assert!(!sunday.ends_with(" .. "));
        assert!(sunday.ends_with("    "));
    }

    #[test]
    fn sunday_run_does_not_panic_or_double_render() {
        // 2024-03-17 is a Sunday: offset 7, today's row is j = 6. Today's
        // commits land at key 7, which belongs to the week-1 column; the
        // week-0 today cell reads past its six entries and shows zero.
        let sunday_noon = Utc.with_ymd_and_hms(2024, 3, 17, 12, 0, 0).unwrap();
        let mut bucket = DayBucket::new(GraphConfig::SIX_MONTHS);
        bucket.set(7, 12);
        let lines = render_plain(&bucket, sunday_noon);

        let top = &lines[row_line(6)];
        assert!(top.ends_with(" .. "));

        // Key 7 shows exactly once, at week 1 of the Sunday row, followed by
        // the blank future cell of week 0.
        let bottom = &lines[row_line(0)];
        assert!(bottom.ends_with(" ██     "));
        let grid_region = lines[3..=row_line(0)].join("\n");
        assert_eq!(grid_region.matches("██").count(), 1);

        // Every week-0 row below today is in the future and stays blank.
        for j in 0..=5 {
            assert!(lines[row_line(j)].ends_with("    "));
        }
    }

    #[test]
    fn legend_lists_tiers_between_less_and_more() {
        let bucket = DayBucket::new(GraphConfig::SIX_MONTHS);
        let lines = render_plain(&bucket, friday_noon());

        let legend = &lines[row_line(0) + 2];
        let pad = " ".repeat(4 * 23 + 3);
        assert_eq!(legend, &format!("{pad}Less  ..  ░░  ▒▒  ██ More"));
    }
}
