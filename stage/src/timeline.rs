//! Deadline queue for timed cues.
//!
//! Every timed component owns exactly one `Timeline` and schedules all of its
//! pending cues into it. The host never holds raw timer handles, so tearing a
//! component down is a single [`Timeline::cancel_all`] and no cue can fire
//! afterwards.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    at_ms: f64,
    seq: u64,
}

/// Ordered set of `(key, deadline)` pairs. A key is scheduled at most once.
#[derive(Debug, Clone)]
pub struct Timeline<K> {
    entries: Vec<Entry<K>>,
    next_seq: u64,
}

impl<K> Default for Timeline<K> {
    fn default() -> Self {
        Self { entries: Vec::new(), next_seq: 0 }
    }
}

impl<K: Clone + PartialEq> Timeline<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to fire at `at_ms`. Rescheduling an existing key moves it.
    pub fn schedule(&mut self, key: K, at_ms: f64) {
        self.entries.retain(|e| e.key != key);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { key, at_ms, seq });
    }

    /// Remove `key` if pending. Returns whether anything was removed.
    pub fn cancel(&mut self, key: &K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.key != key);
        self.entries.len() != before
    }

    /// Drop every pending cue.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Remove and return the earliest cue whose deadline is `<= now_ms`,
    /// together with that deadline. Ties resolve in scheduling order.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(K, f64)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.at_ms <= now_ms)
            .min_by(|(_, a), (_, b)| a.at_ms.total_cmp(&b.at_ms).then(a.seq.cmp(&b.seq)))
            .map(|(i, _)| i)?;
        let entry = self.entries.remove(idx);
        Some((entry.key, entry.at_ms))
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.at_ms).min_by(f64::total_cmp)
    }

    #[must_use]
    pub fn is_scheduled(&self, key: &K) -> bool {
        self.entries.iter().any(|e| &e.key == key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
