//! Tangelo Store library.
//!
//! Everything behind the console: domain models, flat-file repositories, and
//! the checkout pipeline (pricing, payment authorization, invoicing, shipment
//! creation, carrier tracking).
//!
//! Persistence is deliberately simple: each repository rewrites its whole
//! JSON collection on every mutation. That is fine for the single-user scope
//! and keeps the storage swappable behind the repository types.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod session;
