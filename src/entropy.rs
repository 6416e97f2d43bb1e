//! Order-0 Shannon entropy of symbol sequences.
//!
//! The entropy of a frequency table with total count $n$ is
//! $H = -\sum_i p_i \log_2 p_i$ with $p_i = c_i / n$, summed over the symbols that occur.
//! No smoothing is applied, so unseen symbols contribute nothing.

use crate::text::TextSample;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Occurrence counts of the distinct symbols of a sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable<S: Ord> {
    counts: BTreeMap<S, usize>,
    total: usize,
}

impl<S: Ord> FrequencyTable<S> {
    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> Self {
        let mut counts = BTreeMap::new();
        let mut total = 0;
        for symbol in symbols {
            *counts.entry(symbol).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, symbol: &S) -> usize {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> {
        self.counts.iter().map(|(symbol, &count)| (symbol, count))
    }

    /// Entropy in bits per symbol with respect to the table's own total.
    pub fn entropy(&self) -> f64 {
        compute_entropy(self, self.total)
    }

    /// Symbols with their probabilities, most frequent first. Ties keep symbol order.
    pub fn ranked_probabilities(&self) -> Vec<(&S, f64)> {
        if self.total == 0 {
            return Vec::new();
        }
        let total = self.total as f64;
        self.counts
            .iter()
            .sorted_by(|first, second| second.1.cmp(first.1))
            .map(|(symbol, &count)| (symbol, count as f64 / total))
            .collect()
    }
}

impl FrequencyTable<char> {
    /// Count the chars of a text sample.
    pub fn from_text(sample: &TextSample) -> Self {
        Self::from_symbols(sample.chars())
    }
}

impl FrequencyTable<u8> {
    /// Count the bytes of a text sample's UTF-8 encoding.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_symbols(bytes.iter().copied())
    }
}

/// Shannon entropy in bits per symbol of `table` with probabilities `count / total_count`.
///
/// `total_count` must be at least the sum of the counts in `table`; a smaller value gives
/// probabilities above one and the result is not a valid entropy. Returns 0 if `total_count`
/// is 0.
pub fn compute_entropy<S: Ord>(table: &FrequencyTable<S>, total_count: usize) -> f64 {
    if total_count == 0 {
        return 0.0;
    }
    let total = total_count as f64;

    let entropy: f64 = table
        .counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // A single symbol gives -0.0.
    if entropy == 0.0 {
        0.0
    } else {
        entropy
    }
}
