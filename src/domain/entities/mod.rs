//! Core domain entities.
//!
//! The registry has a single entity, [`Entry`], plus the key normalization
//! rule shared by every lookup path.

pub mod entry;

pub use entry::{Entry, clean_key};
