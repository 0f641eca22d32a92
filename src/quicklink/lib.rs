//! # Quicklink Architecture
//!
//! Quicklink expands **URL templates**: strings with typed `{...}` placeholders
//! for arguments, clipboard text, the selection and dates, each followed by an
//! optional chain of text modifiers.
//!
//! ```text
//! https://duckduckgo.com/?q={argument name="q" default="rust" | percent-encode}&t={date format="yyyy-MM-dd" offset="-1d"}
//! ```
//!
//! Like any UI-agnostic library, it is a library that happens to have a CLI
//! client, not the other way round.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, clipboard.rs, config.rs)      │
//! │  - Parses arguments, prints results, sets exit codes        │
//! │  - Reads the clipboard, the selection and the clock         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - process / analyze / validate entry points                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolver, analyzer and validator                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Grammar & Transforms (placeholder/, date/, modifiers.rs)   │
//! │  - Scanner, parser, attributes, options, offsets, formats   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Pure Core
//!
//! From `api.rs` inward, every operation is a synchronous function of its
//! arguments:
//! - Clipboard text, selection and the reference instant arrive as values
//! - Nothing is cached between calls and there is no global state
//! - Malformed input degrades (unknown placeholders pass through, bad
//!   offsets are ignored) instead of failing
//!
//! ## Module Overview
//!
//! - [`api`]: Entry points for all operations
//! - [`commands`]: Process, analyze and validate logic
//! - [`placeholder`]: Scanner and placeholder grammar
//! - [`date`]: Date offsets and format patterns
//! - [`modifiers`]: The modifier pipeline
//! - [`model`]: Core data types
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support for the CLI
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod date;
pub mod error;
pub mod model;
pub mod modifiers;
pub mod placeholder;
