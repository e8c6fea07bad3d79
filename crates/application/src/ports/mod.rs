mod directory_store;
mod peer_status_source;

pub use directory_store::DirectoryStore;
pub use peer_status_source::PeerStatusSource;
