//! Shared types for the retail admin console.
//!
//! Everything here is platform independent and is compiled both into the
//! wasm frontend and into native test binaries.

pub mod domain;
pub mod shared;
