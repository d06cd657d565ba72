//! Most active raters.

use crate::stats::user_counts;
use crate::tables::{Ranked, UserActivity, rank};
use data_loader::Rating;

/// The `limit` users with the most ratings, count descending, ties by
/// user id ascending.
pub fn top_users(ratings: &[Rating], limit: usize) -> Vec<Ranked<UserActivity>> {
    let mut counts: Vec<UserActivity> = user_counts(ratings)
        .into_iter()
        .map(|(user_id, count)| UserActivity { user_id, count })
        .collect();

    counts.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.user_id.cmp(&b.user_id)));
    counts.truncate(limit);
    rank(counts)
}
