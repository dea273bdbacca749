//! firstline: the First Line terminal app
//!
//! Drives a [`firstwords::Session`] from a ratatui interface with three
//! screens: Home, the Intro Builder and the Motivation Space.

pub mod cli;
pub mod config;
pub mod tui;

pub use config::Config;
