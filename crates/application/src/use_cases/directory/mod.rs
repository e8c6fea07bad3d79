mod refresh_directory;

pub use refresh_directory::{RefreshDirectoryUseCase, RefreshOutcome};
