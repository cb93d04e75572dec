use super::super::utils::{ConnectionPath, Hop};
use crate::catalog::PersonRef;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

pub struct FrontierEntry {
    pub key: String,
    pub person: PersonRef,
    pub depth: usize,
}

/// Frontier, visited set and parent links of one search.
///
/// A key enters `visited` exactly when it is enqueued, so no person is
/// enqueued or expanded twice.
pub struct BfsState {
    queue: VecDeque<FrontierEntry>,
    visited: FxHashSet<String>,
    parent_map: FxHashMap<String, (String, Hop)>,
}

impl BfsState {
    pub fn new(start_key: String, start: PersonRef) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        visited.insert(start_key.clone());
        queue.push_back(FrontierEntry {
            key: start_key,
            person: start,
            depth: 0,
        });

        Self {
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    pub fn next_entry(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    /// Enqueues `neighbor` unless its key was seen before. Returns whether it
    /// was enqueued.
    pub fn visit_neighbor(
        &mut self,
        key: String,
        neighbor: PersonRef,
        parent: &FrontierEntry,
        hop: Hop,
    ) -> bool {
        if self.visited.contains(&key) {
            return false;
        }

        self.visited.insert(key.clone());
        self.parent_map.insert(key.clone(), (parent.key.clone(), hop));
        self.queue.push_back(FrontierEntry {
            key,
            person: neighbor,
            depth: parent.depth + 1,
        });
        true
    }

    pub fn discovered(&self) -> usize {
        self.visited.len()
    }

    /// Walks parent links back from `key` to the start
    pub fn path_to(&self, key: &str) -> ConnectionPath {
        let mut hops = Vec::new();
        let mut current = key;

        while let Some((parent, hop)) = self.parent_map.get(current) {
            hops.push(hop.clone());
            current = parent;
        }

        hops.reverse();
        ConnectionPath::new(hops)
    }
}
