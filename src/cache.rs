//! Depth-keyed memo tables.
//!
//! Entries are only ever appended; the whole table is dropped when the
//! generation it was filled under goes stale.

use std::collections::HashMap;

use tracing::trace;

/// Values memoized per depth, tagged with the generation they belong to.
#[derive(Debug)]
pub struct DepthCache<V> {
    entries: HashMap<usize, V>,
    generation: u64,
}

impl<V> Default for DepthCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            generation: 0,
        }
    }
}

impl<V> DepthCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for `depth` under `generation`, computing it with `f`
    /// if missing. A newer generation clears the table first.
    pub fn get_or_insert_with(
        &mut self,
        depth: usize,
        generation: u64,
        f: impl FnOnce() -> V,
    ) -> &V {
        if generation != self.generation {
            trace!(
                from = self.generation,
                to = generation,
                dropped = self.entries.len(),
                "depth cache invalidated"
            );
            self.entries.clear();
            self.generation = generation;
        }
        self.entries.entry(depth).or_insert_with(f)
    }

    /// Cached value for `depth`, if present and current.
    pub fn get(&self, depth: usize, generation: u64) -> Option<&V> {
        if generation == self.generation {
            self.entries.get(&depth)
        } else {
            None
        }
    }

    /// Some current value, if any has been computed.
    pub fn any(&self, generation: u64) -> Option<&V> {
        if generation == self.generation {
            self.entries.values().next()
        } else {
            None
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of entries, including stale ones not yet dropped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
