//! Utility functions shared across CLI commands.

pub mod ui;
