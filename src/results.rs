/// Merging and ranking of threads from several lookups

use std::collections::HashSet;

use crate::thread::Thread;

/// Threads collected for one search, unique by identifier.
/// The first source to report an identifier wins.
#[derive(Debug, Default)]
pub struct ResultSet {
    seen_ids: HashSet<String>,
    threads: Vec<Thread>,
}

impl ResultSet {
    pub fn new() -> Self {
        ResultSet::default()
    }

    /// Add threads from one source, skipping ids already present and
    /// threads without an id. Returns how many were added.
    pub fn extend(&mut self, threads: impl IntoIterator<Item = Thread>) -> usize {
        let before = self.threads.len();
        for thread in threads {
            if thread.id.is_empty() || self.seen_ids.contains(&thread.id) {
                continue;
            }
            self.seen_ids.insert(thread.id.clone());
            self.threads.push(thread);
        }
        self.threads.len() - before
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    /// Threads by score, highest first. Equal scores keep insertion order.
    pub fn into_ranked(self) -> Vec<Thread> {
        let mut threads = self.threads;
        threads.sort_by(|a, b| b.score.cmp(&a.score));
        threads
    }
}
