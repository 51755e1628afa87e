//! # Custdesk Architecture
//!
//! Custdesk is an interactive terminal menu over a single collection of
//! customer records. The operator picks a numbered entry, the matching
//! operation runs against the record store, and the menu comes back until
//! they quit.
//!
//! The library holds everything that is not terminal I/O; the binary adds a
//! thin CLI on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, tables, exit codes                   │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store handle for the session                    │
//! │  - One method per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Create, list, update (with re-read check), delete        │
//! │  - Resolves display indexes against a listing snapshot      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Async RecordStore trait                                  │
//! │  - FileStore (file://), InMemoryStore (memory://, tests)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input classification ([`validate`]) is pure and sits beside the layers:
//! the CLI asks it whether a line is acceptable before anything reaches the
//! API.
//!
//! ## Execution Model
//!
//! One operator, one session, one outstanding store call. The binary runs on
//! a current-thread runtime; every prompt and every store call is awaited
//! before the next begins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each operation
//! - [`store`]: Storage abstraction, backends and connection strings
//! - [`model`]: `Customer` and its update types
//! - [`index`]: Display positions for listings
//! - [`validate`]: Input classification per prompt context
//! - [`config`]: Startup configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod validate;
