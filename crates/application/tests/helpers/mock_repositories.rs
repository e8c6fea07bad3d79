#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tailnet_dns_application::ports::{DirectoryStore, PeerStatusSource};
use tailnet_dns_domain::{Directory, DomainError, PeerStatus, PeerStatusSnapshot};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockPeerStatusSource {
    snapshot: Arc<RwLock<PeerStatusSnapshot>>,
    failure: Arc<RwLock<Option<DomainError>>>,
    delay: Arc<RwLock<Option<Duration>>>,
    calls: Arc<AtomicUsize>,
}

impl MockPeerStatusSource {
    pub fn new() -> Self {
        Self::with_snapshot(PeerStatusSnapshot::new(
            PeerStatus::new("self", Vec::new(), true),
            Vec::new(),
        ))
    }

    pub fn with_snapshot(snapshot: PeerStatusSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
            failure: Arc::new(RwLock::new(None)),
            delay: Arc::new(RwLock::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn set_snapshot(&self, snapshot: PeerStatusSnapshot) {
        *self.snapshot.write().await = snapshot;
    }

    pub async fn set_failure(&self, error: Option<DomainError>) {
        *self.failure.write().await = error;
    }

    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.write().await = delay;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockPeerStatusSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PeerStatusSource for MockPeerStatusSource {
    async fn fetch_status(&self) -> Result<PeerStatusSnapshot, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.failure.read().await.clone() {
            return Err(error);
        }

        Ok(self.snapshot.read().await.clone())
    }
}

pub struct MockDirectoryStore {
    current: std::sync::RwLock<Arc<Directory>>,
    generation: AtomicU64,
    publishes: AtomicUsize,
}

impl MockDirectoryStore {
    pub fn new() -> Self {
        Self::with_directory(Directory::empty())
    }

    pub fn with_directory(directory: Directory) -> Self {
        Self {
            current: std::sync::RwLock::new(Arc::new(directory)),
            generation: AtomicU64::new(0),
            publishes: AtomicUsize::new(0),
        }
    }

    pub fn publish_count(&self) -> usize {
        self.publishes.load(Ordering::SeqCst)
    }
}

impl Default for MockDirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryStore for MockDirectoryStore {
    fn current(&self) -> Arc<Directory> {
        self.current.read().unwrap().clone()
    }

    fn publish(&self, directory: Directory) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.current.write().unwrap() = Arc::new(directory.with_generation(generation));
        self.publishes.fetch_add(1, Ordering::SeqCst);
        generation
    }
}

/// Hands out `first` on the first read and `then` on every later read, as if
/// a refresh landed right after the first `current()`.
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
