//! Decoders for snapshot files written by the maintenance tool.
//!
//! # Error Handling Strategy
//!
//! A snapshot file either decodes completely or not at all. There is no
//! line-level recovery: a missing field, a textual duration or truncated JSON
//! all produce [`StoreError::Decode`](crate::error::StoreError::Decode) carrying
//! the run identifier and the serde error. Nothing here logs; the caller
//! decides how loud a failure should be.

pub mod deserializers;
pub mod snapshot;

pub use snapshot::{MAX_SNAPSHOT_BYTES, parse_snapshot_file};
