//! Library half of `rf-cli`: argument definitions, command handlers and the
//! favorites file.

pub mod cli;
pub mod commands;
pub mod favorites_file;
