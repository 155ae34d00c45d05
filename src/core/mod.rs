//! Core business logic: state, actions, and configuration.
//!
//! Nothing in here knows about ratatui or the terminal. The `tui` module
//! drives this layer through `action::update` and executes the effects it
//! returns.

pub mod action;
pub mod config;
pub mod state;
