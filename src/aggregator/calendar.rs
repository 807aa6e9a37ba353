//! Calendar arithmetic on local wall-clock times.
//!
//! Every bucket boundary is computed through this trait, so the aggregator
//! never touches chrono's date math directly. Comparisons (`<`, `>`) on
//! `NaiveDateTime` stand in for before/after checks.

use chrono::{Datelike, Days, Duration, Months, NaiveDateTime, NaiveTime};

/// Units the calendar can truncate to and step by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarUnit {
    Day,
    Month,
}

/// Start/end/add operations over calendar units
pub trait CalendarExt: Sized {
    /// Truncate to the first instant of the unit containing `self`
    fn start_of(&self, unit: CalendarUnit) -> Self;

    /// Last representable instant of the unit containing `self`
    ///
    /// `None` when the following unit is outside the representable range.
    fn end_of(&self, unit: CalendarUnit) -> Option<Self>;

    /// Step forward by `n` units, `None` on overflow
    fn add(&self, n: u32, unit: CalendarUnit) -> Option<Self>;

    /// The instant immediately after `self`
    fn next_instant(&self) -> Option<Self>;
}

impl CalendarExt for NaiveDateTime {
    fn start_of(&self, unit: CalendarUnit) -> Self {
        match unit {
            CalendarUnit::Day => self.date().and_time(NaiveTime::MIN),
            CalendarUnit::Month => {
                let date = self.date();
                date.with_day(1).unwrap_or(date).and_time(NaiveTime::MIN)
            }
        }
    }

    fn end_of(&self, unit: CalendarUnit) -> Option<Self> {
        self.start_of(unit)
            .add(1, unit)?
            .checked_sub_signed(Duration::nanoseconds(1))
    }

    fn add(&self, n: u32, unit: CalendarUnit) -> Option<Self> {
        match unit {
            CalendarUnit::Day => self.checked_add_days(Days::new(u64::from(n))),
            CalendarUnit::Month => self.checked_add_months(Months::new(n)),
        }
    }

    fn next_instant(&self) -> Option<Self> {
        self.checked_add_signed(Duration::nanoseconds(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_start_of_day_and_month() {
        let t = at(2021, 11, 17, 13, 45, 10);
        assert_eq!(t.start_of(CalendarUnit::Day), at(2021, 11, 17, 0, 0, 0));
        assert_eq!(t.start_of(CalendarUnit::Month), at(2021, 11, 1, 0, 0, 0));
    }

    #[test]
    fn test_end_of_month_handles_short_months() {
        let t = at(2021, 2, 10, 8, 0, 0);
        let end = t.end_of(CalendarUnit::Month).unwrap();
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2021, 2, 28).unwrap());
        assert_eq!(end.next_instant().unwrap(), at(2021, 3, 1, 0, 0, 0));
    }

    #[test]
    fn test_end_of_day_is_inclusive_last_instant() {
        let t = at(2021, 12, 31, 12, 0, 0);
        let end = t.end_of(CalendarUnit::Day).unwrap();
        assert!(end > at(2021, 12, 31, 23, 59, 59));
        assert!(end < at(2022, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_add_crosses_year_boundary() {
        let t = at(2021, 12, 31, 0, 0, 0);
        assert_eq!(t.add(1, CalendarUnit::Day).unwrap(), at(2022, 1, 1, 0, 0, 0));
        assert_eq!(t.add(2, CalendarUnit::Month).unwrap(), at(2022, 2, 28, 0, 0, 0));
    }

    #[test]
    fn test_end_of_overflows_at_max() {
        assert!(NaiveDateTime::MAX.end_of(CalendarUnit::Month).is_none());
    }
}
