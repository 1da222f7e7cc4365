//! # Error Types
//!
//! All errors that can occur in the container and configuration layers.

use thiserror::Error;

/// Errors reported by fixed-capacity containers.
///
/// Every variant is reported before any state changes, so a container that
/// returned an error is exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// Attempted to construct a container with no slots.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// The backing storage for `capacity` elements could not be reserved.
    #[error("failed to reserve storage for {capacity} elements")]
    AllocationFailed {
        /// Requested capacity.
        capacity: usize,
    },

    /// Attempted to add to a full container.
    #[error("capacity exceeded: all {capacity} slots are live")]
    CapacityExceeded {
        /// Fixed capacity of the container.
        capacity: usize,
    },

    /// Indexed access outside the live range.
    #[error("index {index} out of range for {count} live elements")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Live element count at the time of the call.
        count: usize,
    },

    /// Attempted to remove from an empty container.
    #[error("container is empty")]
    EmptyContainer,
}

/// Result type for container operations.
pub type ArrayResult<T> = Result<T, ArrayError>;

/// Result type for insertions that hand a rejected element back to the caller.
pub type InsertResult<T> = Result<(), (ArrayError, T)>;

/// Errors that can occur while loading capacity configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configured capacity is zero.
    #[error("invalid capacity for `{name}`: must be greater than zero")]
    InvalidCapacity {
        /// Name of the offending entry.
        name: String,
    },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
