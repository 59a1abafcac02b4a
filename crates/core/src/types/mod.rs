//! Core types for Persimmon.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod id;
pub mod metadata;
pub mod money;
pub mod status;

pub use address::{ADDRESS_FIELDS, Address};
pub use id::*;
pub use metadata::Metadata;
pub use money::{Currency, Money, quantize_price};
pub use status::*;
