use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 86_400_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_SECOND: i64 = 1000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownValue {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownValue {
    /// Splits a positive millisecond distance into whole units. Sub-second
    /// remainders are dropped.
    pub fn from_millis(distance: i64) -> Self {
        let distance = distance.max(0);
        Self {
            days: (distance / MILLIS_PER_DAY) as u64,
            hours: ((distance % MILLIS_PER_DAY) / MILLIS_PER_HOUR) as u64,
            minutes: ((distance % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u64,
            seconds: ((distance % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u64,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Label/value pairs in display order.
    pub fn cells(&self) -> [(&'static str, u64); 4] {
        [
            ("Days", self.days),
            ("Hours", self.hours),
            ("Minutes", self.minutes),
            ("Seconds", self.seconds),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownState {
    Running(CountdownValue),
    Launched,
}

impl CountdownState {
    pub fn at(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let distance = (target - now).num_milliseconds();
        if distance > 0 {
            CountdownState::Running(CountdownValue::from_millis(distance))
        } else {
            CountdownState::Launched
        }
    }

    /// Launched clamps to zero.
    pub fn value(&self) -> CountdownValue {
        match self {
            CountdownState::Running(value) => *value,
            CountdownState::Launched => CountdownValue::default(),
        }
    }

    pub fn is_launched(&self) -> bool {
        matches!(self, CountdownState::Launched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn one_day_before_launch() {
        let state = CountdownState::at(
            instant("2025-08-08T19:00:00Z"),
            instant("2025-08-07T19:00:00Z"),
        );
        assert_eq!(
            state,
            CountdownState::Running(CountdownValue { days: 1, hours: 0, minutes: 0, seconds: 0 })
        );
    }

    #[test]
    fn decomposition_matches_whole_seconds() {
        let target = instant("2025-08-08T19:00:00Z");
        let offsets_ms = [1, 999, 1000, 59_999, 3_600_001, 86_399_999, 90_061_500, 1_234_567_891];
        for ms in offsets_ms {
            let now = target - Duration::milliseconds(ms);
            let value = CountdownState::at(target, now).value();
            assert_eq!(value.total_seconds(), (ms / 1000) as u64, "offset {ms}");
            assert!(value.hours < 24);
            assert!(value.minutes < 60);
            assert!(value.seconds < 60);
        }
    }

    #[test]
    fn mixed_units() {
        let value = CountdownValue::from_millis(2 * MILLIS_PER_DAY + 3 * MILLIS_PER_HOUR + 4 * MILLIS_PER_MINUTE + 5 * MILLIS_PER_SECOND + 999);
        assert_eq!(value, CountdownValue { days: 2, hours: 3, minutes: 4, seconds: 5 });
    }

    #[test]
    fn launched_at_and_after_target() {
        let target = instant("2025-08-08T19:00:00Z");
        assert!(CountdownState::at(target, target).is_launched());
        let after = CountdownState::at(target, target + Duration::hours(5));
        assert!(after.is_launched());
        assert_eq!(after.value(), CountdownValue::default());
    }

    #[test]
    fn cells_are_in_display_order() {
        let value = CountdownValue { days: 4, hours: 3, minutes: 2, seconds: 1 };
        let labels: Vec<_> = value.cells().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Days", "Hours", "Minutes", "Seconds"]);
        assert_eq!(value.cells()[0].1, 4);
    }
}
