//! Library surface of the `callrep` binary: argument types, command
//! implementations, logging setup, and console summaries.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
