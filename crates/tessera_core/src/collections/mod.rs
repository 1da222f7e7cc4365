//! # Collections
//!
//! Fixed-capacity containers for the frame loop.
//!
//! ## Design Philosophy
//!
//! Storage is reserved once, when the owner builds the container. After that:
//! - No heap allocations
//! - No resizing, a full container reports instead of growing
//! - Predictable, flat latency

mod fixed_array;

pub use fixed_array::{Comparator, FixedSizeArray};
