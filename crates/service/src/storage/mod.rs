//! Storage abstractions for service layer
//!
//! Contains the reusable file-backed map store used by the JSON repository.

pub mod json_map_store;
