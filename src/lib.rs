//! Library crate for pwned-check-rs exposing reusable modules.
pub mod breach;
pub mod config;
pub mod digest;
pub mod error;
pub mod logging;
pub mod report;
pub mod server;
pub mod strength;
pub mod types;
