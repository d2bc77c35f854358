//! The hash-map used for vertex deduplication.

pub use hashbrown::hash_map::{Entry, HashMap};
