//! Domain types and pure logic for the photo-generator service.
//!
//! Everything in this crate is deterministic, synchronous, and free of I/O:
//! the static style and call-type catalogs, the call-entry vocabulary, and
//! the screenshot description building that backs the generation endpoint.
//! HTTP concerns live in `photogen-api`.

pub mod catalog;
pub mod error;
pub mod screenshot;
