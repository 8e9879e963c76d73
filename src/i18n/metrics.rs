//! Translation lookup metrics.
//!
//! Counts how often keys resolve in the requested language, resolve only
//! through the default-language fallback, or miss entirely.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Translation lookup counters.
pub struct TranslationMetrics {
    /// Resolved in the requested language
    direct_hits: AtomicUsize,

    /// Resolved only through the default language
    fallback_hits: AtomicUsize,

    /// Not resolved in any language
    misses: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// A fresh set of counters, independent of the global one.
    pub fn new() -> Self {
        Self {
            direct_hits: AtomicUsize::new(0),
            fallback_hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Process-wide counters used by translators unless told otherwise.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    pub fn record_direct_hit(&self) {
        self.direct_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback_hit(&self) {
        self.fallback_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn direct_hits(&self) -> usize {
        self.direct_hits.load(Ordering::Relaxed)
    }

    pub fn fallback_hits(&self) -> usize {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Snapshot the counters into a report.
    pub fn report(&self) -> MetricsReport {
        let direct = self.direct_hits();
        let fallback = self.fallback_hits();
        let misses = self.misses();
        let total = direct + fallback + misses;

        let rate = |count: usize| {
            if total > 0 {
                (count as f64 / total as f64) * 100.0
            } else {
                0.0
            }
        };

        MetricsReport {
            lookups: total,
            direct_hits: direct,
            fallback_hits: fallback,
            misses,
            fallback_rate: rate(fallback),
            miss_rate: rate(misses),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.direct_hits.store(0, Ordering::Relaxed);
        self.fallback_hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Default for TranslationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub direct_hits: usize,
    pub fallback_hits: usize,
    pub misses: usize,

    /// Share of lookups answered by the default language, 0-100
    pub fallback_rate: f64,

    /// Share of lookups that found nothing, 0-100
    pub miss_rate: f64,
}
