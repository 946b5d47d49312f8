use chrono::{DateTime, Utc};

/// A completed attendance interval. Open intervals (no exit scan yet) never
/// reach this module; the store query excludes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedInterval {
    pub entry: DateTime<Utc>,
    pub exit: DateTime<Utc>,
}

/// Total billable hours of `intervals` inside the window `[start, end]`.
///
/// Per interval: overlap = max(0, min(exit, end) - max(entry, start)).
/// An interval that ends before its entry contributes zero.
pub fn billable_hours(
    intervals: &[ClosedInterval],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> f64 {
    let mut total = 0.0;
    for interval in intervals {
        let overlap_start = interval.entry.max(start);
        let overlap_end = interval.exit.min(end);
        if overlap_start < overlap_end {
            total += (overlap_end - overlap_start).num_seconds() as f64 / 3600.0;
        }
    }
    total
}

pub fn invoice_amount(hours: f64, rate_per_hour: f64) -> f64 {
    hours * rate_per_hour
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, hour, min, 0).unwrap()
    }

    fn interval(entry: DateTime<Utc>, exit: DateTime<Utc>) -> ClosedInterval {
        ClosedInterval { entry, exit }
    }

    #[test]
    fn interval_fully_inside_window_counts_whole_duration() {
        let intervals = [interval(utc(2, 9, 0), utc(2, 17, 0))];
        let hours = billable_hours(&intervals, utc(1, 0, 0), utc(10, 0, 0));
        assert_eq!(hours, 8.0);
    }

    #[test]
    fn interval_fully_outside_window_counts_nothing() {
        let intervals = [interval(utc(2, 9, 0), utc(2, 17, 0))];
        let hours = billable_hours(&intervals, utc(5, 0, 0), utc(10, 0, 0));
        assert_eq!(hours, 0.0);
    }

    #[test]
    fn partial_overlap_is_clipped_to_the_window() {
        // [09:00, 17:00] against [12:00, 23:59] leaves 12:00..17:00
        let intervals = [interval(utc(2, 9, 0), utc(2, 17, 0))];
        let hours = billable_hours(&intervals, utc(2, 12, 0), utc(2, 23, 59));
        assert_eq!(hours, 5.0);
    }

    #[test]
    fn interval_straddling_the_window_start_is_clipped() {
        let intervals = [interval(utc(1, 22, 0), utc(2, 2, 0))];
        let hours = billable_hours(&intervals, utc(2, 0, 0), utc(3, 0, 0));
        assert_eq!(hours, 2.0);
    }

    #[test]
    fn multiple_intervals_sum() {
        let intervals = [
            interval(utc(2, 9, 0), utc(2, 12, 0)),
            interval(utc(3, 13, 0), utc(3, 17, 30)),
            interval(utc(20, 9, 0), utc(20, 17, 0)), // outside
        ];
        let hours = billable_hours(&intervals, utc(1, 0, 0), utc(10, 0, 0));
        assert_eq!(hours, 7.5);
    }

    #[test]
    fn no_intervals_means_zero_hours() {
        assert_eq!(billable_hours(&[], utc(1, 0, 0), utc(10, 0, 0)), 0.0);
    }

    #[test]
    fn inverted_interval_contributes_zero() {
        // exit before entry is not enforced at write time; the clamp
        // keeps it from going negative
        let intervals = [interval(utc(2, 17, 0), utc(2, 9, 0))];
        let hours = billable_hours(&intervals, utc(1, 0, 0), utc(10, 0, 0));
        assert_eq!(hours, 0.0);
    }

    #[test]
    fn fractional_hours_are_kept() {
        let intervals = [interval(utc(2, 9, 0), utc(2, 9, 45))];
        let hours = billable_hours(&intervals, utc(1, 0, 0), utc(10, 0, 0));
        assert_eq!(hours, 0.75);
    }

    #[test]
    fn amount_is_hours_times_rate() {
        assert_eq!(invoice_amount(7.5, 40.0), 300.0);
        assert_eq!(invoice_amount(0.0, 40.0), 0.0);
    }
}
