//! Library components of the labqc command line.

pub mod commands;
pub mod logging;
pub mod prompt;
pub mod summary;
