mod shared_directory;

pub use shared_directory::SharedDirectory;
