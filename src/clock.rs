use chrono::{Local, Timelike};
use std::sync::Arc;

/// Source of the current hour of the day.
pub trait Clock: Send + Sync {
    fn current_hour(&self) -> u32;
}

/// Reads the hour from the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Always reports the same hour.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

#[cfg(test)]
impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.0
    }
}

// Sampled once when the screen appears
pub async fn sample_hour(clock: Arc<dyn Clock>) -> u32 {
    let hour = clock.current_hour();
    log::debug!("Sampled current hour: {}", hour);
    hour
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_hour_in_range() {
        assert!(SystemClock.current_hour() < 24);
    }

    #[tokio::test]
    async fn test_sample_hour_reads_clock() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(17));
        assert_eq!(sample_hour(clock).await, 17);
    }
}
