//! Streak and completion calculator.
//!
//! Pure functions over a habit's day log. Nothing here is cached: every
//! metric is recomputed from the full log on each call, and the log may
//! arrive in any order.

use chrono::NaiveDate;

use super::HabitLogEntry;

/// Whole-day distance from `earlier` to `later`.
fn day_gap(earlier: NaiveDate, later: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

fn completed_dates(log: &[HabitLogEntry]) -> Vec<NaiveDate> {
    log.iter()
        .filter(|entry| entry.completed)
        .map(|entry| entry.date)
        .collect()
}

/// Length of the run of consecutive completed days ending at the most
/// recent completion.
///
/// The streak is broken (returns 0) unless the most recent completion is
/// `today` or the day before it. Days logged as not completed are
/// ignored, so they break a run exactly like unlogged days.
pub fn current_streak(log: &[HabitLogEntry], today: NaiveDate) -> u32 {
    let mut dates = completed_dates(log);
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let Some(&most_recent) = dates.first() else {
        return 0;
    };

    if most_recent != today && Some(most_recent) != today.pred_opt() {
        return 0;
    }

    let mut streak: u32 = 1;
    for pair in dates.windows(2) {
        match day_gap(pair[1], pair[0]) {
            // duplicate date
            0 => continue,
            1 => streak += 1,
            _ => break,
        }
    }
    streak
}

/// Longest run of consecutive completed days anywhere in the log.
pub fn longest_streak(log: &[HabitLogEntry]) -> u32 {
    let mut dates = completed_dates(log);
    if dates.is_empty() {
        return 0;
    }
    dates.sort_unstable();

    let mut current: u32 = 1;
    let mut longest: u32 = 1;
    for pair in dates.windows(2) {
        let gap = day_gap(pair[0], pair[1]);
        if gap == 1 {
            current += 1;
            longest = longest.max(current);
        } else if gap > 1 {
            current = 1;
        }
    }
    longest
}

/// Percentage of logged days that were completed, rounded to the nearest
/// integer.
///
/// Only logged days count: a habit completed on 1 of 1 logged days is at
/// 100 regardless of its target or age. An empty log yields 0.
pub fn completion_rate(log: &[HabitLogEntry]) -> u8 {
    if log.is_empty() {
        return 0;
    }
    let completed = log.iter().filter(|entry| entry.completed).count();
    percent(completed, log.len())
}

/// `round(100 * part / total)` with halves rounded up, in integer
/// arithmetic so exact halves never drift below .5.
pub(crate) fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((200 * part + total) / (2 * total)) as u8
}

/// Upsert the entry for `date`, returning the new log.
///
/// An existing entry for the date is replaced wholesale, so passing
/// `None` for `note` clears a previously stored note. The input log is
/// left untouched.
pub fn mark_day(
    log: &[HabitLogEntry],
    date: NaiveDate,
    completed: bool,
    note: Option<String>,
) -> Vec<HabitLogEntry> {
    let entry = HabitLogEntry {
        date,
        completed,
        note,
    };

    let mut next = log.to_vec();
    match next.iter_mut().find(|existing| existing.date == date) {
        Some(slot) => *slot = entry,
        None => next.push(entry),
    }
    next
}
