//! # TESSERA Core
//!
//! Fixed-capacity containers designed for:
//! - Per-frame spawn/despawn churn with zero allocations
//! - Bounded-cost add, remove and indexed access
//! - Failures reported, never hidden behind a reallocation
//!
//! ## Architecture Rules
//!
//! 1. **Reserve once** - Capacity is decided at construction and never changes
//! 2. **Packed live range** - Live elements always occupy `[0, count)`
//! 3. **Failed operations are no-ops** - An error leaves the container untouched
//!
//! ## Example
//!
//! ```rust
//! use tessera_core::{FixedSizeArray, ObjectPool};
//!
//! #[derive(Default)]
//! struct Bullet { x: f32, speed: f32 }
//!
//! let mut pool: ObjectPool<Bullet> = ObjectPool::new(64)?;
//! let mut live: FixedSizeArray<Bullet> = FixedSizeArray::new(64)?;
//!
//! // Spawn
//! live.add(pool.allocate()?)?;
//!
//! // Despawn, order does not matter
//! let bullet = live.swap_remove(0)?;
//! pool.release(bullet)?;
//! # Ok::<(), tessera_core::ArrayError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod collections;
pub mod config;
pub mod error;
pub mod memory;

pub use collections::{Comparator, FixedSizeArray};
pub use config::{PoolConfig, PoolEntry, DEFAULT_CAPACITY};
pub use error::{ArrayError, ArrayResult, ConfigError, ConfigResult, InsertResult};
pub use memory::ObjectPool;
