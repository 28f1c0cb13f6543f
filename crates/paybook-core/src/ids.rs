//! Employee identifier generation.
//!
//! Identifiers are Unix-epoch milliseconds taken at creation time, so they
//! look like plain integers and sort by creation order. Two calls inside the
//! same millisecond would collide on the clock alone; the generator bumps the
//! second one past the first so every id it hands out is strictly greater
//! than the previous one.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use crate::domain::{EmployeeId, EmployeeRecord};

/// Strictly increasing, wall-clock based id source.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Next identifier: the current time in milliseconds, or one past the
    /// previous identifier if the clock has not moved forward.
    pub fn next_id(&self) -> EmployeeId {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Acquire);
        loop {
            let candidate = if now > last { now } else { last.saturating_add(1) };
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return EmployeeId::new(candidate),
                Err(actual) => last = actual,
            }
        }
    }

    /// Next identifier that does not clash with any id in `records`.
    ///
    /// Records written by another process (or an older run) may already own
    /// the clock value; in that case the id continues after the largest one
    /// present.
    pub fn next_unused(&self, records: &[EmployeeRecord]) -> EmployeeId {
        let id = self.next_id();
        if records.iter().all(|r| r.id != id) {
            return id;
        }
        let max = records.iter().map(|r| r.id.get()).max().unwrap_or(0);
        self.last.fetch_max(max.saturating_add(1), Ordering::AcqRel);
        self.next_id()
    }
}

static GLOBAL_IDS: IdGenerator = IdGenerator::new();

/// Generate an identifier from the process-wide generator.
pub fn generate_id() -> EmployeeId {
    GLOBAL_IDS.next_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_ids_follow_the_clock() {
        let before = Utc::now().timestamp_millis();
        let id = IdGenerator::new().next_id();
        assert!(id.get() >= before);
    }

    #[test]
    fn test_rapid_ids_are_distinct_and_increasing() {
        let ids = IdGenerator::new();
        let generated: Vec<i64> = (0..1_000).map(|_| ids.next_id().get()).collect();
        assert!(generated.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_global_generator_is_monotonic() {
        let a = generate_id();
        let b = generate_id();
        assert!(b > a);
    }

    #[test]
    fn test_concurrent_ids_never_collide() {
        let ids = Arc::new(IdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 1_000);
    }

    #[test]
    fn test_next_unused_skips_existing_ids() {
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        let records = vec![EmployeeRecord::new(
            EmployeeId::new(far_future),
            "A",
            "B",
            1.0,
        )];
        let ids = IdGenerator::new();
        // Force the clock value to collide with the stored record.
        ids.last.store(far_future - 1, Ordering::Release);

        let id = ids.next_unused(&records);
        assert!(id.get() > far_future);
    }
}
