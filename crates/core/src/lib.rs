//! Annuaire Core - Shared types library.
//!
//! This crate provides the common types used across the coiffeur directory
//! components:
//! - `server` - HTTP API over the coiffeur record store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The coiffeur record model and type-safe IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
