//! Interactive Page - a single interactive page rendered in the terminal
//!
//! A light/dark theme switch, a counter game, an FAQ accordion, tabbed
//! panels, hover cards, a typing area with live statistics and a validated
//! registration form. The form validation engine in [`form`] is independent
//! of the terminal and can be driven directly.

pub mod config;
pub mod effects;
pub mod features;
pub mod form;
pub mod ui;

pub use config::Config;
