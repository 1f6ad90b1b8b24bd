//! Configuration management for subprobe.
//!
//! Provides XDG-compliant settings storage.

mod settings;

pub use settings::AppSettings;
