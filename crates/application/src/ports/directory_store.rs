use std::sync::Arc;
use tailnet_dns_domain::Directory;

/// Holder of the directory currently being served.
///
/// Single writer (the refresh use case), many readers (query resolution).
/// `publish` replaces the whole directory; readers holding the previous
/// `Arc` keep a consistent view until they drop it.
pub trait DirectoryStore: Send + Sync {
    fn current(&self) -> Arc<Directory>;

    /// Stamps the directory with the next generation, swaps it in and
    /// returns that generation.
    fn publish(&self, directory: Directory) -> u64;
}
