//! Library crate for match-board, exposing modules for binaries and integration tests.

pub mod config;
/// Request and response payloads.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// HTTP route trees.
pub mod routes;
/// Business operations over the shared state.
pub mod services;
/// In-memory match stores and the shared application state.
pub mod state;
