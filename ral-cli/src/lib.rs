//! Command-line front end for the net salary calculator.
//!
//! Turns user-typed salary text into a validated amount, runs the
//! calculation and renders the breakdown as text or JSON.

pub mod config;
pub mod format;
pub mod input;
pub mod logging;
pub mod report;
