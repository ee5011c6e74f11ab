//! Date source for history and audit stamps.
//!
//! Registry records carry Bikram Sambat date strings, so the store never
//! computes with dates; it only stamps them. The trait keeps mutations
//! deterministic under test and lets a deployment pin the fiscal date.

use std::fmt::Debug;

pub trait Clock: Send + Sync + Debug {
    /// Date stamp, `YYYY-MM-DD`.
    fn today(&self) -> String;
    /// Datetime stamp, `YYYY-MM-DD HH:MM:SS`.
    fn now(&self) -> String;
}

/// Wall clock, Gregorian. Used when no fiscal date is pinned.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> String {
        chrono::Utc::now().format("%Y-%m-%d").to_string()
    }

    fn now(&self) -> String {
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Pinned date, for seeding, tests and BS-calendar deployments.
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub date: String,
    pub time: String,
}

impl FixedClock {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: "10:00:00".to_string(),
        }
    }
}

impl Default for FixedClock {
    /// The fixture data set's "today".
    fn default() -> Self {
        Self::new("2081-05-15")
    }
}

impl Clock for FixedClock {
    fn today(&self) -> String {
        self.date.clone()
    }

    fn now(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_deterministic() {
        let c = FixedClock::default();
        assert_eq!(c.today(), "2081-05-15");
        assert_eq!(c.now(), "2081-05-15 10:00:00");
    }

    #[test]
    fn system_clock_formats() {
        let c = SystemClock;
        assert_eq!(c.today().len(), 10);
        assert_eq!(c.now().len(), 19);
    }
}
