//! Tailnet DNS Infrastructure Layer
pub mod directory;
pub mod dns;
pub mod status;
