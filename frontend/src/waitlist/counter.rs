use log::error;

use super::service::{CountResponse, ServiceError, WaitlistService};
use crate::config;

/// Value to display after the initial load, or None to keep the default.
pub fn initial_count(result: Result<CountResponse, ServiceError>) -> Option<u64> {
    match result {
        Ok(CountResponse { success: true, count: Some(count) }) if count > 0 => {
            Some(count + config::INITIAL_COUNT_OFFSET)
        }
        Ok(_) => None,
        Err(e) => {
            error!("Error loading waitlist count: {}", e);
            None
        }
    }
}

/// Post-signup refresh shows the raw server count, no offset.
pub fn refreshed_count(result: Result<CountResponse, ServiceError>) -> Option<u64> {
    match result {
        Ok(CountResponse { success: true, count }) => count,
        Ok(_) => None,
        Err(e) => {
            error!("Error refreshing waitlist count: {}", e);
            None
        }
    }
}

pub async fn load_initial(service: &dyn WaitlistService) -> Option<u64> {
    initial_count(service.get_count().await)
}

pub async fn refresh_after_submit(service: &dyn WaitlistService) -> Option<u64> {
    refreshed_count(service.get_count().await)
}

/// 12504 -> "12,504"
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::waitlist::testing::MockWaitlist;

    fn ok(count: u64) -> Result<CountResponse, ServiceError> {
        Ok(CountResponse { success: true, count: Some(count) })
    }

    #[test]
    fn initial_load_adds_offset() {
        assert_eq!(initial_count(ok(2573)), Some(3573));
    }

    #[test]
    fn initial_load_ignores_zero_and_failures() {
        assert_eq!(initial_count(ok(0)), None);
        assert_eq!(initial_count(Ok(CountResponse { success: false, count: None })), None);
        assert_eq!(initial_count(Err(ServiceError::Transport("offline".into()))), None);
    }

    #[test]
    fn refresh_uses_raw_count() {
        assert_eq!(refreshed_count(ok(2574)), Some(2574));
        assert_eq!(refreshed_count(ok(0)), Some(0));
        assert_eq!(refreshed_count(Err(ServiceError::Status(500))), None);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(config::DEFAULT_WAITLIST_COUNT), "12,504");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn load_initial_queries_once_and_offsets() {
        let service = MockWaitlist::accepting(42);
        assert_eq!(block_on(load_initial(&service)), Some(1042));
        assert_eq!(service.count_calls(), 1);
    }

    #[test]
    fn failed_initial_load_keeps_default() {
        let service = MockWaitlist::failing(ServiceError::Transport("dns".into()));
        let shown = block_on(load_initial(&service)).unwrap_or(config::DEFAULT_WAITLIST_COUNT);
        assert_eq!(shown, 12504);
    }
}
