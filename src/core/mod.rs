//! # Core Browsing Logic
//!
//! This module contains toolshelf's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App)          │
//!                    │  • Action (commands)    │
//!                    │  • update() (reducer)   │
//!                    │  • filter::visible()    │
//!                    │                         │
//!                    │  No UI. Pure except for │
//!                    │  the favorites port.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  headless  │
//!           │  Adapter   │              │  --print   │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all browsing state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`filter`]: The filter/sort engine
//! - [`selection`]: The bounded compare set
//! - [`favorites`]: The persisted favorites set and its store port
//! - [`config`]: Config file + env + CLI resolution

pub mod action;
pub mod config;
pub mod favorites;
pub mod filter;
pub mod selection;
pub mod state;
