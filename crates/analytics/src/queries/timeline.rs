//! Rating volume over time.
//!
//! Timestamps are unix seconds and are bucketed in UTC, so the output does
//! not depend on the machine's local timezone.

use crate::error::{AnalyticsError, Result};
use crate::tables::{DailyCount, HourlyCount};
use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use data_loader::Rating;
use std::collections::BTreeMap;

fn utc(timestamp: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0).ok_or(AnalyticsError::InvalidTimestamp(timestamp))
}

/// Ratings per UTC calendar date, ascending by date.
///
/// Only dates that have at least one rating appear; there is no gap filling.
pub fn rating_distribution_by_date(ratings: &[Rating]) -> Result<Vec<DailyCount>> {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for rating in ratings {
        let date = utc(rating.timestamp)?.date_naive();
        *per_day.entry(date).or_insert(0) += 1;
    }

    Ok(per_day
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect())
}

/// Ratings per UTC hour of day, ascending by hour.
///
/// Hours without ratings are absent.
pub fn ratings_by_hour(ratings: &[Rating]) -> Result<Vec<HourlyCount>> {
    let mut per_hour: BTreeMap<u32, u64> = BTreeMap::new();
    for rating in ratings {
        let hour = utc(rating.timestamp)?.hour();
        *per_hour.entry(hour).or_insert(0) += 1;
    }

    Ok(per_hour
        .into_iter()
        .map(|(hour, count)| HourlyCount {
            hour,
            time: hour_label(hour),
            count,
        })
        .collect())
}

/// "12 AM", "01 AM", ..., "11 PM"
fn hour_label(hour: u32) -> String {
    NaiveTime::from_hms_opt(hour, 0, 0)
        .map(|t| t.format("%I %p").to_string())
        .unwrap_or_else(|| format!("{:02}", hour))
}
