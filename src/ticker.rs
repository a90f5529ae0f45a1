use std::time::Duration;

/// Event poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// How long a freshly added card stays highlighted
pub const JUST_ADDED_MS: u64 = 250;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

pub fn just_added_duration() -> Duration {
    Duration::from_millis(JUST_ADDED_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        assert_eq!(tick_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_highlight_fits_in_one_tick() {
        assert!(just_added_duration() <= tick_duration());
    }
}
