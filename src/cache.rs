//! Ephemeral answer cache.
//!
//! Bounded, time-expiring map keyed on the normalised question. Expired
//! entries are dropped lazily on lookup; at capacity the entry with the
//! oldest insertion stamp is evicted. Eviction follows insertion order,
//! not access order.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::text::normalize;

struct CacheEntry {
    answer: String,
    inserted_at: Instant,
    /// Monotonic tiebreaker for entries inserted at the same instant.
    seq: u64,
}

struct Inner {
    entries: HashMap<String, CacheEntry>,
    next_seq: u64,
}

pub struct AnswerCache {
    ttl: Duration,
    capacity: usize,
    inner: Mutex<Inner>,
}

impl AnswerCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity,
            inner: Mutex::new(Inner { entries: HashMap::new(), next_seq: 0 }),
        }
    }

    pub fn get(&self, question: &str) -> Option<String> {
        self.get_at(question, Instant::now())
    }

    pub fn put(&self, question: &str, answer: &str) {
        self.put_at(question, answer, Instant::now());
    }

    /// Look up `question` as of `now`.
    pub fn get_at(&self, question: &str, now: Instant) -> Option<String> {
        let key = normalize(question);
        let Ok(mut inner) = self.inner.lock() else {
            warn!("answer cache lock poisoned; treating as miss");
            return None;
        };

        let age = inner
            .entries
            .get(&key)
            .map(|e| now.saturating_duration_since(e.inserted_at))?;

        if age < self.ttl {
            inner.entries.get(&key).map(|e| e.answer.clone())
        } else {
            debug!(key = %key, "cache entry expired");
            inner.entries.remove(&key);
            None
        }
    }

    /// Insert `answer` for `question` stamped with `now`.
    pub fn put_at(&self, question: &str, answer: &str, now: Instant) {
        if self.capacity == 0 {
            return;
        }
        let key = normalize(question);
        let Ok(mut inner) = self.inner.lock() else {
            warn!("answer cache lock poisoned; dropping write");
            return;
        };

        if !inner.entries.contains_key(&key) && inner.entries.len() >= self.capacity {
            let oldest = inner
                .entries
                .iter()
                .min_by_key(|(_, e)| (e.inserted_at, e.seq))
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                debug!(evicted = %oldest, "cache at capacity");
                inner.entries.remove(&oldest);
            }
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(
            key,
            CacheEntry { answer: answer.to_string(), inserted_at: now, seq },
        );
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|i| i.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
