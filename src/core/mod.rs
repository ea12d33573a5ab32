//! # Core Application Logic
//!
//! This module contains Mood Mirror's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (app data)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • mood table, history  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  Headless  │
//!            │  Adapter   │            │  --check   │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Session` struct, all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`mood`]: Mood keys and the response table
//! - [`history`]: Read-only past check-ins
//! - [`config`]: Config file, env and CLI resolution (the one module here that reads files)

pub mod action;
pub mod config;
pub mod history;
pub mod mood;
pub mod state;
