#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tailnet_dns_application::ports::DirectoryStore;
use tailnet_dns_domain::Directory;

/// Serves `first` on the first read and `then` afterwards, standing in for a
/// refresh that publishes between two reads of the same query.
pub struct SwappingDirectoryStore {
    first: Arc<Directory>,
    then: Arc<Directory>,
    reads: AtomicUsize,
}

impl SwappingDirectoryStore {
    pub fn new(first: Directory, then: Directory) -> Self {
        Self {
            first: Arc::new(first.with_generation(1)),
            then: Arc::new(then.with_generation(2)),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DirectoryStore for SwappingDirectoryStore {
    fn current(&self) -> Arc<Directory> {
        if self.reads.fetch_add(1, Ordering::SeqCst) == 0 {
            self.first.clone()
        } else {
            self.then.clone()
        }
    }

    fn publish(&self, _directory: Directory) -> u64 {
        self.then.generation()
    }
}
