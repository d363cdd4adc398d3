//! # Core Application Logic
//!
//! This module contains Chatpane's chat state.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Rooms, users, lines  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`room`]: `Room`, `User`, `Line`: what the views render
//! - [`state`]: The `App` struct: all chat state in one place
//! - [`action`]: The `Action` enum: everything that can happen in the app
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod config;
pub mod room;
pub mod state;
