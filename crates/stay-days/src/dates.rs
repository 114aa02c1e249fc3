use chrono::NaiveDate;
use stay_schemas::{parse_day, StayRecord};

/// Inclusive calendar-day range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    /// `None` when `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Inclusive day count. Always >= 1.
    pub fn days(&self) -> u32 {
        // end >= start is guaranteed by the constructor.
        (self.end - self.start).num_days() as u32 + 1
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Every day in the span, oldest first.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Inclusive number of days between two dates, in either order.
///
/// `NaiveDate` carries no time-of-day, so daylight-saving shifts cannot
/// leak into the count.
pub fn calculate_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

/// [`calculate_days`] over raw `YYYY-MM-DD` strings. `None` if either side
/// does not parse.
pub fn calculate_days_str(start: &str, end: &str) -> Option<i64> {
    Some(calculate_days(parse_day(start)?, parse_day(end)?))
}

/// The stay's date range, or `None` if either date is unparseable or the
/// range is inverted.
pub fn stay_span(stay: &StayRecord) -> Option<DateSpan> {
    DateSpan::new(stay.start()?, stay.end()?)
}

/// Stable sort by start date. Stays without a parseable start go last, in
/// input order.
pub fn sort_stays(stays: &[StayRecord]) -> Vec<&StayRecord> {
    let mut out: Vec<&StayRecord> = stays.iter().collect();
    out.sort_by_key(|s| {
        let start = s.start();
        (start.is_none(), start)
    });
    out
}

pub fn ranges_overlap(a: &DateSpan, b: &DateSpan) -> bool {
    a.start <= b.end && b.start <= a.end
}

/// Intersection of two inclusive ranges.
pub fn range_overlap(a: &DateSpan, b: &DateSpan) -> Option<DateSpan> {
    if !ranges_overlap(a, b) {
        return None;
    }
    DateSpan::new(a.start.max(b.start), a.end.min(b.end))
}
