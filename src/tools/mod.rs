//! The tools module provides helper functions for huffcode.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Byte frequency count of input data.
//!
pub mod cli;
pub mod freq_count;
