use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Europe::London;

pub const WAITLIST_TABLE: &str = "waitlist";

/// Shown until the first count fetch succeeds.
pub const DEFAULT_WAITLIST_COUNT: u64 = 12504;
/// Added to the server count on the initial load only.
pub const INITIAL_COUNT_OFFSET: u64 = 1000;

pub const TICK_MILLIS: u32 = 1000;

pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already registered";

#[cfg(debug_assertions)]
pub fn supabase_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or("http://localhost:54321")  // supabase start
}

#[cfg(not(debug_assertions))]
pub fn supabase_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or("")
}

pub fn supabase_anon_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or("")
}

/// August 8th 2025, 8pm UK time (BST, so 19:00 UTC).
pub fn launch_instant() -> DateTime<Utc> {
    London
        .with_ymd_and_hms(2025, 8, 8, 20, 0, 0)
        .single()
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_is_seven_pm_utc() {
        let expected: DateTime<Utc> = "2025-08-08T19:00:00Z".parse().unwrap();
        assert_eq!(launch_instant(), expected);
    }
}
