//! # Crudgen Architecture
//!
//! Crudgen is a thin client for a remote UML-to-CRUD generation service. The service does
//! all the real work (parsing the diagram, emitting code, counting classes); this crate
//! builds the request, performs a single HTTP exchange and turns the reply into messages.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, prints messages, decides exit codes        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the transport and the service base URL              │
//! │  - Dispatches to commands                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Builds requests, interprets replies                      │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport Layer (transport/)                               │
//! │  - Abstract `Transport` trait                               │
//! │  - HttpTransport (production), StubTransport (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure model
//!
//! Local failures (unreadable UML file, unserializable request, unreachable service) are
//! returned as [`error::CrudgenError`] and end the run with exit code 1. Anything the
//! service itself reports (a non-200 status, `success: false`) is a normal
//! [`commands::CmdResult`] carrying error-level messages; the process still exits 0.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: `generate`, `validate` and the next-step table
//! - [`transport`]: HTTP abstraction and implementations
//! - [`model`]: Wire types (`GenerationRequest`, `GenerationResult`) and `Framework`
//! - [`config`]: Optional config file supplying flag defaults
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod transport;
