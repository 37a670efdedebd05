//! Centralized default constants for cinelog.
//!
//! Shared values live here so the db and api crates agree on them.

// =============================================================================
// RATING
// =============================================================================

/// Lowest accepted rating (inclusive).
pub const RATING_MIN: i32 = 1;

/// Highest accepted rating (inclusive).
pub const RATING_MAX: i32 = 5;

// =============================================================================
// CLIENT MESSAGES
// =============================================================================

/// Returned when a rating falls outside `RATING_MIN..=RATING_MAX`.
pub const MSG_RATING_OUT_OF_RANGE: &str = "Please insert a rating between 1 and 5.";

/// Returned when a movie title is already taken.
pub const MSG_DUPLICATE_TITLE: &str = "This movie is already registered.";

// =============================================================================
// TAG FILTER
// =============================================================================

/// Separator between tag names in the `tags` list filter.
pub const TAG_FILTER_SEPARATOR: char = ',';

// =============================================================================
// SERVER
// =============================================================================

/// Default database URL when `DATABASE_URL` is unset.
pub const DATABASE_URL: &str = "postgres://localhost/cinelog";

/// Default bind host.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const SERVER_PORT: u16 = 3000;

/// Default maximum request body size in bytes (1 MiB).
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default maximum number of pooled database connections.
pub const DB_MAX_CONNECTIONS: u32 = 10;

/// Default wait for a free pooled connection, in seconds.
pub const DB_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Default idle time before a pooled connection is closed, in seconds.
pub const DB_IDLE_TIMEOUT_SECS: u64 = 600;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds_are_ordered() {
        assert!(RATING_MIN < RATING_MAX);
        assert_eq!(RATING_MIN, 1);
        assert_eq!(RATING_MAX, 5);
    }

    #[test]
    fn test_rating_message_matches_bounds() {
        assert!(MSG_RATING_OUT_OF_RANGE.contains(&RATING_MIN.to_string()));
        assert!(MSG_RATING_OUT_OF_RANGE.contains(&RATING_MAX.to_string()));
    }
}
