use super::bucket::DayBucket;
use std::collections::BTreeMap;

/// Counts for one calendar week, in days-ago order within the week.
pub type WeekColumn = Vec<u32>;

/// Sealed weekly columns keyed by week index, 0 being the current week.
pub type Grid = BTreeMap<usize, WeekColumn>;

/// Group the bucket's sorted keys into weekly columns.
///
/// A column starts when `k % 7 == 0` and is sealed into the grid when
/// `k % 7 == 6`. Two columns never seal: the current week (key 0 is reserved
/// and the week is cut short at today) and the oldest week when the window
/// begins mid-week. The current week is rendered anyway via the week-0
/// special case; the oldest partial is dropped, losing at most 6 days at the
/// far edge of the window. That boundary behavior is deliberate.
pub fn build_grid(bucket: &DayBucket) -> Grid {
    let mut grid = Grid::new();
    let mut col = WeekColumn::new();

    for k in bucket.keys_sorted() {
        let week = k / 7;
        let day_in_week = k % 7;

        if day_in_week == 0 {
            col = WeekColumn::new();
        }
        col.push(bucket.get(k));
        if day_in_week == 6 {
            grid.insert(week, col.clone());
        }
    }

    grid
}
