//! Calendar helpers
//!
//! Date rules in the registry are evaluated against the current UK calendar
//! date. Dates are plain `NaiveDate`s; the filer supplies no time of day.

use chrono::{NaiveDate, Utc};

/// Today's date as seen by the evaluator
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whether `date` is strictly before `reference`
pub fn is_before(date: NaiveDate, reference: NaiveDate) -> bool {
    date < reference
}

/// Whether `date` is strictly in the past
///
/// A date equal to today is not in the past.
pub fn is_in_past(date: NaiveDate) -> bool {
    is_before(date, today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use proptest::prelude::*;

    #[test]
    fn test_today_is_not_in_past() {
        assert!(!is_in_past(today()));
    }

    #[test]
    fn test_yesterday_is_in_past() {
        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
        assert!(is_in_past(yesterday));
    }

    #[test]
    fn test_tomorrow_is_not_in_past() {
        let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
        assert!(!is_in_past(tomorrow));
    }

    proptest! {
        #[test]
        fn past_check_is_idempotent(offset in 1u64..40_000u64) {
            let date = today().checked_sub_days(Days::new(offset)).unwrap();
            prop_assert!(is_in_past(date));
            prop_assert!(is_in_past(date));
        }

        #[test]
        fn future_dates_always_fail(offset in 0u64..40_000u64) {
            let date = today().checked_add_days(Days::new(offset)).unwrap();
            prop_assert!(!is_in_past(date));
        }
    }
}
