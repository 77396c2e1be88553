//! Domain primitives shared by the catalog store and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod search;
pub mod types;
