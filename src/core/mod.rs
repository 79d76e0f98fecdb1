//! # Core Simulation
//!
//! The character stats engine. It knows nothing about terminals, hosts, or
//! timers.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • CharacterStats       │
//!                    │  • Command parser       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ StatsView
//!                                ▼
//!                         ┌────────────┐
//!                         │   Shell    │
//!                         │  (stdin,   │
//!                         │   ticks)   │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`stats`]: `CharacterStats` and the derived-metric calculations
//! - [`command`]: the text command grammar and its dispatch
//! - [`state`]: the `App` struct, stats plus presentation flags
//! - [`action`]: the `Action` enum and `update()`
//! - [`view`]: `StatsView`, the snapshot handed to the presentation layer
//! - [`config`]: config file, env, and CLI resolution

pub mod action;
pub mod command;
pub mod config;
pub mod state;
pub mod stats;
pub mod view;
