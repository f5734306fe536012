use crate::models::{ProgressSummary, Record};

/// Summary metrics over a date-sorted log: most recent weight, all-time
/// best, and the change since the first record. `delta` is `None` for a
/// single-record log rather than zero, so "no prior data" stays visible.
pub fn summarize(log: &[Record]) -> Option<ProgressSummary> {
    let first = log.first()?;
    let last = log.last()?;

    let best = log
        .iter()
        .map(|record| record.weight)
        .fold(first.weight, f64::max);
    let delta = (log.len() > 1).then(|| last.weight - first.weight);

    Some(ProgressSummary {
        last: last.weight,
        best,
        delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, weight: f64) -> Record {
        Record {
            date: date.parse::<NaiveDate>().unwrap(),
            weight,
        }
    }

    #[test]
    fn summary_over_multiple_records() {
        let log = vec![
            record("2024-01-01", 50.0),
            record("2024-01-15", 55.0),
            record("2024-02-01", 60.0),
        ];

        let summary = summarize(&log).expect("non-empty log");
        assert_eq!(summary.last, 60.0);
        assert_eq!(summary.best, 60.0);
        assert_eq!(summary.delta, Some(10.0));
    }

    #[test]
    fn single_record_has_no_delta() {
        let log = vec![record("2024-01-01", 50.0)];

        let summary = summarize(&log).expect("non-empty log");
        assert_eq!(summary.last, 50.0);
        assert_eq!(summary.best, 50.0);
        assert_eq!(summary.delta, None);
    }

    #[test]
    fn best_can_sit_mid_series() {
        let log = vec![
            record("2024-01-01", 50.0),
            record("2024-01-15", 62.5),
            record("2024-02-01", 57.5),
        ];

        let summary = summarize(&log).expect("non-empty log");
        assert_eq!(summary.last, 57.5);
        assert_eq!(summary.best, 62.5);
        assert_eq!(summary.delta, Some(7.5));
    }

    #[test]
    fn empty_log_has_no_summary() {
        assert_eq!(summarize(&[]), None);
    }
}
