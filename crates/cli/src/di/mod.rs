mod directory;

pub use directory::DirectoryServices;
