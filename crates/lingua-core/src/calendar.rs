//! Rolling challenge calendar window.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};

/// Length of the rolling window shown on the dashboard.
pub const WINDOW_DAYS: u64 = 21;

/// One day of the window, annotated with its completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub completed: bool,
    pub is_today: bool,
}

impl CalendarDay {
    /// Day-of-month number shown in the calendar cell.
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }
}

/// The last 21 consecutive dates ending at the anchor day.
///
/// Derived on every load, never persisted; always exactly 21 entries,
/// strictly increasing by one day, last entry equal to the anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWindow {
    today: NaiveDate,
    dates: Vec<NaiveDate>,
}

impl CalendarWindow {
    /// Build the window ending at `today`.
    pub fn anchored_at(today: NaiveDate) -> Self {
        let dates = (0..WINDOW_DAYS)
            .rev()
            .map(|back| today - Days::new(back))
            .collect();
        Self { today, dates }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Annotate each date with its completion flag.
    pub fn days(&self, completed: &BTreeSet<NaiveDate>) -> Vec<CalendarDay> {
        self.dates
            .iter()
            .map(|&date| CalendarDay {
                date,
                completed: completed.contains(&date),
                is_today: date == self.today,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_has_21_consecutive_days_ending_today() {
        let today = date(2024, 6, 21);
        let window = CalendarWindow::anchored_at(today);

        assert_eq!(window.dates().len(), 21);
        assert_eq!(*window.dates().first().unwrap(), date(2024, 6, 1));
        assert_eq!(*window.dates().last().unwrap(), today);
        for pair in window.dates().windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let today = date(2024, 3, 5);
        let window = CalendarWindow::anchored_at(today);

        assert_eq!(window.dates().len(), 21);
        assert_eq!(*window.dates().first().unwrap(), date(2024, 2, 14));
        assert_eq!(*window.dates().last().unwrap(), today);
    }

    #[test]
    fn test_days_annotates_completion_and_today() {
        let today = date(2024, 6, 21);
        let window = CalendarWindow::anchored_at(today);
        let completed = BTreeSet::from([date(2024, 6, 1), today]);

        let days = window.days(&completed);
        assert_eq!(days.len(), 21);
        assert!(days[0].completed);
        assert!(!days[1].completed);
        assert!(days[20].completed);
        assert!(days[20].is_today);
        assert!(days.iter().filter(|d| d.is_today).count() == 1);
    }
}
