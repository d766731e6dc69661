// src/earnings.rs
//! Earnings-announcement date bookkeeping.
//!
//! A data provider reports a ticker's announcement dates newest-first, mixing
//! scheduled future announcements in with past ones. This module filters the
//! past ones and derives the inter-announcement windows used to slice price
//! history into per-quarter snippets.

use chrono::{DateTime, Utc};

/// Time span between two consecutive earnings announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarningsWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Keep only announcements at or before `now`, preserving newest-first order.
pub fn past_dates(dates: &[DateTime<Utc>], now: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    dates.iter().copied().filter(|date| *date <= now).collect()
}

/// Windows between consecutive announcements of a newest-first date list.
///
/// Window `i` spans from announcement `i + 1` up to announcement `i`, so `n`
/// dates yield `n - 1` windows, newest window first. Fewer than two dates
/// yield none.
pub fn windows(past: &[DateTime<Utc>]) -> Vec<EarningsWindow> {
    past.windows(2)
        .map(|pair| EarningsWindow {
            start: pair[1],
            end: pair[0],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 16, 0, 0).unwrap()
    }

    #[test]
    fn test_past_dates_filters_future_announcements() {
        let dates = [
            date(2023, 10, 24),
            date(2023, 7, 25),
            date(2023, 4, 25),
            date(2023, 1, 24),
        ];
        let now = date(2023, 8, 1);

        let past = past_dates(&dates, now);
        assert_eq!(past, vec![date(2023, 7, 25), date(2023, 4, 25), date(2023, 1, 24)]);
    }

    #[test]
    fn test_past_dates_is_inclusive_of_now() {
        let dates = [date(2023, 7, 25)];
        assert_eq!(past_dates(&dates, date(2023, 7, 25)).len(), 1);
    }

    #[test]
    fn test_windows_pairs_consecutive_dates() {
        let past = [date(2023, 7, 25), date(2023, 4, 25), date(2023, 1, 24)];
        let windows = windows(&past);

        assert_eq!(windows.len(), 2);
        assert_eq!(
            windows[0],
            EarningsWindow {
                start: date(2023, 4, 25),
                end: date(2023, 7, 25),
            }
        );
        assert_eq!(
            windows[1],
            EarningsWindow {
                start: date(2023, 1, 24),
                end: date(2023, 4, 25),
            }
        );
    }

    #[test]
    fn test_windows_needs_two_dates() {
        assert!(windows(&[]).is_empty());
        assert!(windows(&[date(2023, 7, 25)]).is_empty());
    }
}
