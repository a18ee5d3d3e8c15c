//! Command line front end for verifying and producing signed messages.
//!
//! `main.rs` only parses arguments and maps [`Outcome`]s to exit codes, so
//! every command here can be driven with in-memory readers and writers.

mod args;
mod commands;
pub mod config;
pub mod logging;

pub use self::{args::*, commands::*};
