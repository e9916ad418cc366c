use std::sync::{
    Arc,
    atomic::{AtomicI64, AtomicU64, Ordering},
};

use arc_swap::ArcSwap;
use dashmap::DashMap;
use time::OffsetDateTime;

use crate::{
    domain::Operation,
    hooks::{Call, HookRegistry, Outcome},
};

pub const STATS_HANDLER: &str = "stats";

pub type StatsMap = DashMap<Operation, OpStats>;

/// Per-operation call counters fed by after-handlers.
pub struct CallStats {
    current: ArcSwap<StatsMap>,
}

pub struct OpStats {
    calls: AtomicU64,
    failures: AtomicU64,
    misses: AtomicU64,
    last_call_s: AtomicI64,
}

impl Default for CallStats {
    fn default() -> Self {
        Self::new()
    }
}

impl CallStats {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(DashMap::new()),
        }
    }

    /// Register the stats handler on every operation of `registry`.
    pub fn attach(self: &Arc<Self>, registry: &HookRegistry) {
        for hooks in registry.iter() {
            let stats = Arc::clone(self);
            hooks
                .after()
                .register(STATS_HANDLER, move |call, outcome| stats.record(call, outcome));
        }
    }

    pub fn detach(registry: &HookRegistry) -> usize {
        registry
            .iter()
            .map(|hooks| hooks.after().unregister(STATS_HANDLER))
            .sum()
    }

    pub fn record(&self, call: &Call<'_>, outcome: Option<&Outcome<'_>>) {
        let now_s = OffsetDateTime::now_utc().unix_timestamp();
        let error = outcome.and_then(Outcome::error);

        let map = self.current.load();
        let val = map
            .entry(call.operation())
            .or_insert_with(|| OpStats::new(now_s));

        val.calls.fetch_add(1, Ordering::Relaxed);
        match error {
            Some(e) if e.is_cache_miss() => {
                val.misses.fetch_add(1, Ordering::Relaxed);
            }
            Some(_) => {
                val.failures.fetch_add(1, Ordering::Relaxed);
            }
            None => {}
        }

        // keep the newest timestamp
        val.last_call_s.fetch_max(now_s, Ordering::Relaxed);
    }

    /// Snapshot of one operation's counters, `None` if it was never called.
    pub fn get(&self, operation: Operation) -> Option<OpStatsSnapshot> {
        self.current
            .load()
            .get(&operation)
            .map(|val| val.snapshot())
    }

    /// Replace the counters with an empty map and return the old one.
    pub fn take(&self) -> Arc<StatsMap> {
        self.current.swap(Arc::new(DashMap::new()))
    }
}

impl OpStats {
    pub fn new(last_call_s: i64) -> Self {
        Self {
            calls: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            last_call_s: AtomicI64::new(last_call_s),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn last_call_s(&self) -> i64 {
        self.last_call_s.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> OpStatsSnapshot {
        OpStatsSnapshot {
            calls: self.calls(),
            failures: self.failures(),
            misses: self.misses(),
            last_call_s: self.last_call_s(),
        }
    }
}

/// Plain copy of an operation's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpStatsSnapshot {
    pub calls: u64,
    /// Failures other than cache misses.
    pub failures: u64,
    pub misses: u64,
    pub last_call_s: i64,
}
