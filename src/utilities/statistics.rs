/// ----- STATISTICS -----
/// Running totals for one simulation round. Shared by every worker through an
/// `Arc`, all updates are single atomic adds.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct Statistics {
    total_wait_us: AtomicU64,
    total_distance: AtomicU64,
    boarded: AtomicU64,
    delivered: AtomicU64,
    retired: AtomicUsize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub total_wait: Duration,
    pub total_distance: u64,
    pub boarded: u64,
    pub delivered: u64,
    pub retired: usize,
}

impl RoundSummary {
    pub fn average_wait(&self) -> Option<Duration> {
        match self.boarded {
            0 => None,
            n => Some(Duration::from_micros((self.total_wait.as_micros() / n as u128) as u64)),
        }
    }
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_wait(&self, waited: Duration) {
        self.total_wait_us.fetch_add(waited.as_micros() as u64, Ordering::Relaxed);
        self.boarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_step(&self) {
        self.total_distance.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delivery(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_retirement(&self) {
        self.retired.fetch_add(1, Ordering::AcqRel);
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            total_wait: Duration::from_micros(self.total_wait_us.load(Ordering::Relaxed)),
            total_distance: self.total_distance.load(Ordering::Relaxed),
            boarded: self.boarded.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            retired: self.retired.load(Ordering::Acquire),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn concurrent_adds_are_not_lost() {
        let stats = Arc::new(Statistics::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for _ in 0..250 {
                        stats.record_step();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.summary().total_distance, 1000);
    }

    #[test]
    fn average_wait_over_boarded_riders() {
        let stats = Statistics::new();
        assert_eq!(stats.summary().average_wait(), None);
        stats.record_wait(Duration::from_millis(10));
        stats.record_wait(Duration::from_millis(30));
        assert_eq!(stats.summary().average_wait(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn average_wait_survives_huge_counts() {
        let summary = RoundSummary {
            total_wait: Duration::from_secs(1 << 32),
            total_distance: 0,
            boarded: 1 << 32,
            delivered: 0,
            retired: 0,
        };
        assert_eq!(summary.average_wait(), Some(Duration::from_secs(1)));
    }
}
