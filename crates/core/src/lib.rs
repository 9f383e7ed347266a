//! Tangelo Core - Shared types library.
//!
//! This crate provides common types used across all Tangelo components:
//! - `store` - Domain models, repositories, and checkout services
//! - `cli` - The interactive console application
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no user
//! interaction. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
