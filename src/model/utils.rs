use chrono::Duration as ChronoDuration;

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Human-readable age of a leaderboard refresh, e.g. "3 days".
#[must_use]
pub fn format_time_ago(td: ChronoDuration) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const WEEK: i64 = 7 * DAY;

    let secs = td.num_seconds().max(0);

    if secs >= WEEK {
        plural(secs / WEEK, "week")
    } else if secs >= DAY {
        plural(secs / DAY, "day")
    } else if secs >= HOUR {
        plural(secs / HOUR, "hour")
    } else if secs >= MINUTE {
        plural(secs / MINUTE, "minute")
    } else {
        plural(secs, "second")
    }
}
