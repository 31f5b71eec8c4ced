// Human-readable value formatting for cards and list entries.

const RATE_UNITS: [&str; 4] = ["B/s", "KB/s", "MB/s", "GB/s"];
const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

fn scaled(mut value: f64, units: &[&str]) -> String {
    let mut i = 0;
    while value >= 1024.0 && i < units.len() - 1 {
        value /= 1024.0;
        i += 1;
    }
    format!("{:.1} {}", value, units[i])
}

/// Bytes per second, e.g. `1.5 KB/s`.
pub fn network_speed(bytes_per_sec: f64) -> String {
    scaled(bytes_per_sec, &RATE_UNITS)
}

/// Byte count, e.g. `3.2 GB`.
pub fn bytes(bytes: f64) -> String {
    scaled(bytes, &SIZE_UNITS)
}

/// A size given in MB; switches to GB from 1000 MB.
pub fn megabytes(mb: f64) -> String {
    if mb >= 1000.0 {
        format!("{:.1} GB", mb / 1024.0)
    } else {
        format!("{:.1} MB", mb)
    }
}

pub fn percent(value: f64) -> String {
    format!("{:.1} %", value)
}

/// `1d 2h 3m 4s`, omitting zero components; `0s` for zero.
pub fn uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = seconds % 86_400 / 3600;
    let minutes = seconds % 3600 / 60;
    let secs = seconds % 60;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if secs > 0 || parts.is_empty() {
        parts.push(format!("{secs}s"));
    }
    parts.join(" ")
}

/// Coarse "N units ago" for an epoch-ms timestamp relative to `now_ms`.
pub fn relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let seconds = (now_ms - timestamp_ms).max(0) / 1000;
    if seconds < 60 {
        return format!("{seconds} seconds ago");
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes} minutes ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours} hours ago");
    }
    let days = hours / 24;
    if days < 30 {
        return format!("{days} days ago");
    }
    let months = days / 30;
    if months < 12 {
        return format!("{months} months ago");
    }
    format!("{} years ago", months / 12)
}
