//! Networking modules for the external podcast API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls; the wire schema lives in the shared
//! `podcast` crate so the CLI deserializes the same shapes.

pub mod api;

pub use podcast::types;
