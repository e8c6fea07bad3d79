use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tailnet_dns_application::ports::DirectoryStore;
use tailnet_dns_domain::Directory;
use tracing::debug;

/// Lock-free holder of the published directory.
///
/// Readers get an `Arc` to a complete directory; a publish swaps the
/// pointer, so a reader never observes a half-built directory.
pub struct SharedDirectory {
    current: ArcSwap<Directory>,
    generation: AtomicU64,
}

impl SharedDirectory {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Directory::empty()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

impl Default for SharedDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryStore for SharedDirectory {
    fn current(&self) -> Arc<Directory> {
        self.current.load_full()
    }

    fn publish(&self, directory: Directory) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let entries = directory.len();
        self.current
            .store(Arc::new(directory.with_generation(generation)));

        debug!(generation, entries, "Directory swapped");
        generation
    }
}
