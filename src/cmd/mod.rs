//! Command-line argument definitions for the stage binary.

pub mod stage;
