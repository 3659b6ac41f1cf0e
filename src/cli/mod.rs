//! CLI module
//!
//! Command-line interface for the gateway.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP server
//! - `check` - Probe backend reachability

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::Runner;
pub use server::{build_router, serve, AppState};
