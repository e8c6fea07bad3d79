mod dto;
mod json_file;
mod tailscale_cli;

pub use dto::StatusDocument;
pub use json_file::JsonFileStatusSource;
pub use tailscale_cli::TailscaleCliStatusSource;
