// src/crawl/frontier.rs
// =============================================================================
// The frontier: every internal path the crawl knows about, and whether it has
// been fetched yet.
//
// Invariants:
// - A path is stored at most once, however many pages link to it
// - A path leaves the Unvisited state exactly once and never goes back
// - Iteration order is insertion order, which keeps the crawl breadth-first
//   and makes test output deterministic
//
// Rust concepts:
// - HashMap for O(1) "have we seen this?" checks
// - Vec for the ordered list of resources
// =============================================================================

use std::collections::HashMap;

/// Where a resource is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    /// Fetched and scanned for links.
    Fetched,
    /// Fetch attempted and failed; never retried.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub path: String,
    pub state: VisitState,
}

impl Resource {
    pub fn is_visited(&self) -> bool {
        self.state != VisitState::Unvisited
    }
}

#[derive(Debug, Default)]
pub struct Frontier {
    resources: Vec<Resource>,
    // path -> position in `resources`
    index: HashMap<String, usize>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `path` as unvisited unless it is already known.
    ///
    /// Returns true only when the path was newly inserted.
    pub fn register(&mut self, path: &str) -> bool {
        if self.index.contains_key(path) {
            return false;
        }
        self.index.insert(path.to_string(), self.resources.len());
        self.resources.push(Resource {
            path: path.to_string(),
            state: VisitState::Unvisited,
        });
        true
    }

    /// Marks a path as fetched. Idempotent, and a no-op for unknown paths.
    pub fn mark_visited(&mut self, path: &str) {
        self.transition(path, VisitState::Fetched);
    }

    /// Marks a path as visited-but-failed so it is never fetched again.
    pub fn mark_failed(&mut self, path: &str) {
        self.transition(path, VisitState::Failed);
    }

    fn transition(&mut self, path: &str, state: VisitState) {
        if let Some(&position) = self.index.get(path) {
            let resource = &mut self.resources[position];
            if !resource.is_visited() {
                resource.state = state;
            }
        }
    }

    /// The oldest path that hasn't been visited yet.
    pub fn next_unvisited(&self) -> Option<&str> {
        self.resources
            .iter()
            .find(|r| !r.is_visited())
            .map(|r| r.path.as_str())
    }

    /// Snapshot of every unvisited path, in insertion order.
    ///
    /// The crawler takes one of these at the start of each round so that paths
    /// discovered during the round wait for the next one.
    pub fn unvisited(&self) -> Vec<String> {
        self.resources
            .iter()
            .filter(|r| !r.is_visited())
            .map(|r| r.path.clone())
            .collect()
    }

    pub fn has_unvisited(&self) -> bool {
        self.next_unvisited().is_some()
    }

    #[cfg(test)]
    pub(crate) fn state(&self, path: &str) -> Option<VisitState> {
        self.index.get(path).map(|&position| self.resources[position].state)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }
}
