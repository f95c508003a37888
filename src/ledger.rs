//==============================================================================
// Allocation ledger
//==============================================================================
//
// Every `Buffer` records itself here when it is allocated and when it is
// dropped. Counters are per thread, so tests running in parallel only see
// their own buffers.

use std::cell::Cell;

thread_local! {
    static LEDGER: Ledger = Ledger::new();
}

struct Ledger {
    allocations: Cell<usize>,
    releases: Cell<usize>,
    live: Cell<usize>,
    peak_live: Cell<usize>,
    live_bytes: Cell<usize>,
}

impl Ledger {
    fn new() -> Self {
        Ledger {
            allocations: Cell::new(0),
            releases: Cell::new(0),
            live: Cell::new(0),
            peak_live: Cell::new(0),
            live_bytes: Cell::new(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerSnapshot {
    pub allocations: usize,
    pub releases: usize,
    pub live: usize,
    pub peak_live: usize,
    pub live_bytes: usize,
}

impl LedgerSnapshot {
    /// True when every allocation seen since the last reset was released.
    pub fn is_balanced(&self) -> bool {
        self.allocations == self.releases
    }
}

pub fn record_alloc(bytes: usize) {
    LEDGER.with(|l| {
        l.allocations.set(l.allocations.get() + 1);
        l.live.set(l.live.get() + 1);
        l.live_bytes.set(l.live_bytes.get() + bytes);
        if l.live.get() > l.peak_live.get() {
            l.peak_live.set(l.live.get());
        }
    });
}

pub fn record_release(bytes: usize) {
    LEDGER.with(|l| {
        l.releases.set(l.releases.get() + 1);
        l.live.set(l.live.get().saturating_sub(1));
        l.live_bytes.set(l.live_bytes.get().saturating_sub(bytes));
    });
}

pub fn snapshot() -> LedgerSnapshot {
    LEDGER.with(|l| LedgerSnapshot {
        allocations: l.allocations.get(),
        releases: l.releases.get(),
        live: l.live.get(),
        peak_live: l.peak_live.get(),
        live_bytes: l.live_bytes.get(),
    })
}

/// Clears the event counters. Buffers still alive stay counted as live and
/// become the new baseline for `peak_live`.
pub fn reset() {
    LEDGER.with(|l| {
        l.allocations.set(0);
        l.releases.set(0);
        l.peak_live.set(l.live.get());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_release_balance() {
        reset();
        record_alloc(100);
        record_alloc(99);
        let mid = snapshot();
        assert_eq!(mid.allocations, 2);
        assert_eq!(mid.live, 2);
        assert_eq!(mid.live_bytes, 199);
        assert!(!mid.is_balanced());

        record_release(99);
        record_release(100);
        let end = snapshot();
        assert!(end.is_balanced());
        assert_eq!(end.live, 0);
        assert_eq!(end.live_bytes, 0);
        assert_eq!(end.peak_live, 2);
    }

    #[test]
    fn test_reset_keeps_live_as_baseline() {
        reset();
        record_alloc(10);
        reset();
        let snap = snapshot();
        assert_eq!(snap.allocations, 0);
        assert_eq!(snap.live, 1);
        assert_eq!(snap.peak_live, 1);
        record_release(10);
    }

    #[test]
    fn test_counters_are_per_thread() {
        reset();
        record_alloc(1);
        let other = std::thread::spawn(snapshot).join().unwrap();
        assert_eq!(other.allocations, 0);
        record_release(1);
    }
}
