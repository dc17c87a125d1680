// src/models/frequency_table.rs
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts per token, together with the sum of all counts.
///
/// The total travels with the table so relative-frequency queries never
/// depend on whichever table was computed last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K: Eq + Hash> {
    counts: HashMap<K, usize>,
    total: usize,
}

impl<K: Eq + Hash> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash> FrequencyTable<K> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, token: K) {
        let count = self.counts.entry(token).or_insert(0);
        *count = count.saturating_add(1);
        self.total = self.total.saturating_add(1);
    }

    /// Count for `token`, zero when absent.
    #[inline]
    #[must_use]
    pub fn get<Q>(&self, token: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(token, count)| (token, *count))
    }

    /// `count / total` for `token`; `0.0` when the token is absent or the
    /// table is empty.
    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn relative_frequency<Q>(&self, token: &Q) -> f64
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        if self.total == 0 {
            return 0.0;
        }
        self.get(token) as f64 / self.total as f64
    }
}

impl<K: Ord + Eq + Hash> FrequencyTable<K> {
    /// Entries by descending count, ties by ascending token.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&K, usize)> {
        let mut entries: Vec<(&K, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl<K: Eq + Hash> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for token in iter {
            table.record(token);
        }
        table
    }
}
