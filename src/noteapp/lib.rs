//! # NoteApp Architecture
//!
//! NoteApp is a **UI-agnostic note-taking core**. Notes are created, edited,
//! searched, favorited, archived and trashed inside a single in-memory
//! session. Nothing is persisted; when the session ends, the notes are gone.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads session commands, renders the visible list         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the Session              │
//! │  - Normalizes inputs (display indexes → note ids)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + View Filter (filter.rs)    │
//! │  - Note lifecycle: draft submit/edit, trash, restore,       │
//! │    purge, archive and favorite toggles                      │
//! │  - Pure view derivation over the collection                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Missing Ids
//!
//! Operations on an id that is not in the store never fail. They do nothing
//! and report [`commands::Outcome::NotFound`], and a `debug` event is logged
//! so a stale id in a client can still be spotted.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Lifecycle operations and the visible-list query
//! - [`filter`]: The view filter
//! - [`session`]: View, search term, draft and edit target
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`model`]: Core data types (`Note`, `Draft`, `View`)
//! - [`index`]: 1-based display indexes for the visible list
//! - [`labels`]: Static UI label text
//! - [`config`]: Client configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod labels;
pub mod model;
pub mod session;
pub mod store;
