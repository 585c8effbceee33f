//! CozyTab: a personal new-tab dashboard engine.
//!
//! Tabs with back/forward history, workspaces, bookmarks, a browsing log and
//! user settings, mirrored into a local key-value store. This library crate
//! exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
