//! Networking modules for the static data artifacts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds resource paths and fetches/parses bodies, `request` fences
//! overlapping loads, and `types` defines the wire schema.

pub mod api;
pub mod request;
pub mod types;
