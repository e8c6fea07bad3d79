pub mod directory;
pub mod dns;

pub use directory::{RefreshDirectoryUseCase, RefreshOutcome};
pub use dns::{QueryOutcome, ResolveQueryUseCase};
