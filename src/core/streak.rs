//! Day arithmetic for the incident-free streak.

/// Milliseconds in a calendar day, as used for every streak computation.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Whole days elapsed from `since` to `now`, both in milliseconds since epoch.
///
/// Partial days are truncated: anything in `[since, since + MS_PER_DAY)`
/// counts as day 0. An incident stamped in the future (clock moved back)
/// also reads 0 instead of a negative streak. Extreme stored values
/// saturate instead of overflowing.
pub fn days_between(since: i64, now: i64) -> i64 {
    if now <= since {
        return 0;
    }
    now.saturating_sub(since) / MS_PER_DAY
}
