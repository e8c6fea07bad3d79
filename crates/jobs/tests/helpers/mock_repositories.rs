#![allow(dead_code)]

use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tailnet_dns_application::ports::{DirectoryStore, PeerStatusSource};
use tailnet_dns_domain::{Directory, DomainError, PeerStatus, PeerStatusSnapshot};
use tokio::sync::RwLock;

pub struct MockPeerStatusSource {
    snapshot: PeerStatusSnapshot,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockPeerStatusSource {
    pub fn new() -> Self {
        Self::with_failure(false)
    }

    pub fn failing() -> Self {
        Self::with_failure(true)
    }

    fn with_failure(should_fail: bool) -> Self {
        let addr: IpAddr = "100.64.0.1".parse().unwrap();
        Self {
            snapshot: PeerStatusSnapshot::new(
                PeerStatus::new("gateway", vec![addr], true),
                Vec::new(),
            ),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(should_fail)),
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PeerStatusSource for MockPeerStatusSource {
    async fn fetch_status(&self) -> Result<PeerStatusSnapshot, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(DomainError::StatusFetchFailed("mock failure".to_string()));
        }
        Ok(self.snapshot.clone())
    }
}

pub struct MockDirectoryStore {
    current: std::sync::RwLock<Arc<Directory>>,
    generation: AtomicU64,
}

impl MockDirectoryStore {
    pub fn new() -> Self {
        Self {
            current: std::sync::RwLock::new(Arc::new(Directory::empty())),
            generation: AtomicU64::new(0),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

impl DirectoryStore for MockDirectoryStore {
    fn current(&self) -> Arc<Directory> {
        self.current.read().unwrap().clone()
    }

    fn publish(&self, directory: Directory) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.current.write().unwrap() = Arc::new(directory.with_generation(generation));
        generation
    }
}
