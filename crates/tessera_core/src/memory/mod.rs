//! # Memory Management
//!
//! Pre-built object pools for zero-allocation gameplay.
//!
//! All objects are built once at startup. During gameplay they are only
//! handed out and taken back.

mod pool;

pub use pool::ObjectPool;
