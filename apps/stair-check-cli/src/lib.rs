//! Command-line front end for the stair compliance engine

pub mod cli;
pub mod commands;
pub mod render;

/// Commands that evaluate nothing finished normally
pub const EXIT_OK: u8 = 0;
pub const EXIT_COMPLIANT: u8 = 0;
pub const EXIT_NOT_COMPLIANT: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 2;
pub const EXIT_ERROR: u8 = 3;
