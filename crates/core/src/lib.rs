//! Persimmon Core - Shared types library.
//!
//! This crate provides common types used across all Persimmon components:
//! - `apps` - Typed app/extension surface with authorization-aware accessors
//! - `webhooks` - Webhook payload serialization engine
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, global IDs, money with quantization, metadata,
//!   addresses, and the status vocabulary of the wire format
//! - [`permissions`] - Permissions, requestor identity, and authorization errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod permissions;
pub mod types;

pub use permissions::*;
pub use types::*;
