//! Small display-formatting helpers shared by the components.

/// Compact count formatting: 980 -> "980", 45_000 -> "45.0K", 1_250_000 -> "1.3M".
pub fn compact_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Seconds -> "m:ss".
pub fn duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Bytes -> "356 KB" / "1.2 MB".
pub fn file_size(bytes: u64) -> String {
    if bytes >= 1_000_000 {
        format!("{:.1} MB", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{} KB", bytes / 1_000)
    } else {
        format!("{bytes} B")
    }
}

/// Unread badge text, capped like the original list rows.
pub fn unread_badge(count: u32) -> String {
    if count > 99 {
        "99+".to_string()
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_compact_above_thousand() {
        assert_eq!(compact_count(980), "980");
        assert_eq!(compact_count(45_000), "45.0K");
        assert_eq!(compact_count(125_000), "125.0K");
        assert_eq!(compact_count(1_250_000), "1.3M");
    }

    #[test]
    fn durations_render_minutes_and_padded_seconds() {
        assert_eq!(duration(42), "0:42");
        assert_eq!(duration(95), "1:35");
        assert_eq!(duration(600), "10:00");
    }

    #[test]
    fn file_sizes_pick_a_sensible_unit() {
        assert_eq!(file_size(356_000), "356 KB");
        assert_eq!(file_size(1_200_000), "1.2 MB");
        assert_eq!(file_size(512), "512 B");
    }

    #[test]
    fn unread_badge_caps_at_ninety_nine() {
        assert_eq!(unread_badge(3), "3");
        assert_eq!(unread_badge(150), "99+");
    }
}
