pub mod directory_refresh;
pub mod runner;

pub use directory_refresh::DirectoryRefreshJob;
pub use runner::JobRunner;
