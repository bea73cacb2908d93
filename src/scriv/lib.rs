//! # Scriv Architecture
//!
//! Scriv is a **UI-agnostic rich-text command core**. It is not an
//! editor that happens to expose a library; it is the command
//! vocabulary and application semantics an editor builds its menus,
//! toolbars, and shortcuts on top of.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facade (api.rs)                                            │
//! │  - Owns the document, clipboard, host, and localizer        │
//! │  - apply(&mut self, ..): one edit in flight per document    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Resolvers (metadata.rs, apply/)                            │
//! │  - metadata: Action → id, titles, icon key (total, pure)    │
//! │  - apply: Action → document mutation (fails fast, atomic)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Taxonomy (action.rs, model.rs)                             │
//! │  - The closed Action enum and its payload value types       │
//! │  - Alias constructors desugar direction + magnitude         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Backend (document/)                                        │
//! │  - Abstract Document trait                                  │
//! │  - InMemoryDocument (testing and reference semantics)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Both Resolvers Stay Exhaustive
//!
//! [`action::Action`] is a closed sum type and the single integration
//! point. The metadata resolver and the effect applier each match on
//! it without a wildcard arm, so adding a variant does not compile
//! until both handle it.
//!
//! ## Key Principle: Failed Applies Don't Mutate
//!
//! Every fallible action validates before touching the document;
//! every mutating action is infallible, clamping out-of-range results
//! instead of erroring. An `Err` from [`apply::apply`] therefore
//! guarantees the document is exactly as it was.
//!
//! ## Module Overview
//!
//! - [`api`]: The editor facade, the entry point for UI layers
//! - [`action`]: The closed command taxonomy and direction aliases
//! - [`metadata`]: Action → presentation metadata (total)
//! - [`apply`]: Action → document mutation (atomic)
//! - [`model`]: Payload value types (ranges, points, colors, runs)
//! - [`document`]: Storage abstraction and the in-memory backend
//! - [`locale`]: Localization seam and the built-in catalog
//! - [`clipboard`], [`host`]: External collaborator seams
//! - [`config`]: Explicit step magnitudes for the aliases
//! - [`error`]: Error types

pub mod action;
pub mod api;
pub mod apply;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod error;
pub mod host;
pub mod locale;
pub mod metadata;
pub mod model;
