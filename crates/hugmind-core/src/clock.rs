//! Which calendar day counts as "today".
//!
//! The streak calculator takes `today` as an argument and never reads
//! the clock. Callers resolve it here under the configured policy. Near
//! midnight, or after a timezone change, the two policies can disagree by
//! one day; neither is corrected.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day-boundary policy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayBoundary {
    /// Local calendar day of the machine running the process.
    #[default]
    Local,
    /// Calendar day at UTC.
    Utc,
}

impl DayBoundary {
    /// Today's date under this policy.
    pub fn today(self) -> NaiveDate {
        self.date_of(Utc::now())
    }

    /// Calendar date of `instant` under this policy.
    pub fn date_of(self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            DayBoundary::Local => instant.with_timezone(&Local).date_naive(),
            DayBoundary::Utc => instant.date_naive(),
        }
    }
}

impl fmt::Display for DayBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayBoundary::Local => f.write_str("local"),
            DayBoundary::Utc => f.write_str("utc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_policy_uses_utc_date() {
        let instant: DateTime<Utc> = "2024-01-01T23:30:00Z".parse().unwrap();
        assert_eq!(
            DayBoundary::Utc.date_of(instant),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn local_policy_is_within_a_day_of_utc() {
        let instant: DateTime<Utc> = "2024-06-15T12:00:00Z".parse().unwrap();
        let local = DayBoundary::Local.date_of(instant);
        let utc = DayBoundary::Utc.date_of(instant);
        assert!(local.signed_duration_since(utc).num_days().abs() <= 1);
    }

    #[test]
    fn serde_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&DayBoundary::Utc).unwrap(), "\"utc\"");
        assert_eq!(DayBoundary::default(), DayBoundary::Local);
        assert_eq!(DayBoundary::Local.to_string(), "local");
    }
}
