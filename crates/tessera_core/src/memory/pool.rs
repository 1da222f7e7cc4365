//! # Object Pool
//!
//! Pre-built objects handed out and taken back without touching the allocator.

use crate::collections::FixedSizeArray;
use crate::config::PoolConfig;
use crate::error::{ArrayError, ArrayResult, InsertResult};

/// A pool of pre-built objects.
///
/// Every object is constructed up front and parked in a [`FixedSizeArray`]
/// free list. Allocation pops the most recently released object, so hot
/// objects stay hot. This is perfect for things like particles, projectiles
/// or temporary game objects that churn every frame.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. Use one pool per thread or wrap in a mutex.
///
/// # Example
///
/// ```rust
/// use tessera_core::ObjectPool;
///
/// #[derive(Default)]
/// struct Particle { x: f32, y: f32, life: f32 }
///
/// let mut pool: ObjectPool<Particle> = ObjectPool::new(1024)?;
///
/// // Allocate - O(1), no heap allocation
/// let mut particle = pool.allocate()?;
/// particle.life = 1.0;
///
/// // Release - O(1), no heap deallocation
/// pool.release(particle)?;
/// # Ok::<(), tessera_core::ArrayError>(())
/// ```
pub struct ObjectPool<T> {
    /// Objects not currently handed out.
    available: FixedSizeArray<T>,
}

impl<T> ObjectPool<T> {
    /// Creates a pool of `capacity` objects built by `factory`.
    ///
    /// All objects are constructed here, once.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ZeroCapacity`] if `capacity` is zero and
    /// [`ArrayError::AllocationFailed`] if the free list cannot be reserved.
    pub fn with_factory<F>(capacity: usize, mut factory: F) -> ArrayResult<Self>
    where
        F: FnMut() -> T,
    {
        let mut available = FixedSizeArray::new(capacity)?;
        for _ in 0..capacity {
            available.add(factory())?;
        }

        tracing::debug!("object pool filled: {} objects", capacity);

        Ok(Self { available })
    }

    /// Returns the total number of objects owned by the pool.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.available.capacity()
    }

    /// Returns the number of objects ready to be allocated.
    #[inline]
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.available.count()
    }

    /// Returns the number of objects currently handed out.
    #[inline]
    #[must_use]
    pub fn allocated_count(&self) -> usize {
        self.available.remaining()
    }

    /// Takes an object out of the pool.
    ///
    /// This is a **O(1)** operation with **zero heap allocations**. The
    /// object keeps whatever state it had when it was released.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::EmptyContainer`] if every object is handed out.
    pub fn allocate(&mut self) -> ArrayResult<T> {
        self.available.remove_last().map_err(|err| {
            tracing::trace!("object pool exhausted: {} objects in use", self.capacity());
            err
        })
    }

    /// Returns an object to the pool.
    ///
    /// This is a **O(1)** operation with **zero heap deallocations**.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityExceeded`] if the pool already holds
    /// all of its objects, meaning `object` did not come from this pool.
    /// The object is dropped; use [`try_release`](Self::try_release) to keep it.
    pub fn release(&mut self, object: T) -> ArrayResult<()> {
        self.try_release(object).map_err(|(err, _)| err)
    }

    /// Returns an object to the pool, handing it back if the pool is full.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityExceeded`] together with the untouched
    /// object if the pool already holds all of its objects.
    pub fn try_release(&mut self, object: T) -> InsertResult<T> {
        self.available.try_add(object)
    }

    /// Returns an object to the pool after running `reset` on it.
    ///
    /// # Errors
    ///
    /// Same as [`try_release`](Self::try_release). A rejected object comes
    /// back without `reset` having run.
    pub fn release_with<R>(&mut self, mut object: T, reset: R) -> InsertResult<T>
    where
        R: FnOnce(&mut T),
    {
        if self.available.is_full() {
            return Err((
                ArrayError::CapacityExceeded {
                    capacity: self.capacity(),
                },
                object,
            ));
        }
        reset(&mut object);
        self.try_release(object)
    }
}

impl<T: Default> ObjectPool<T> {
    /// Creates a pool of `capacity` default-constructed objects.
    ///
    /// # Errors
    ///
    /// Same as [`with_factory`](Self::with_factory).
    pub fn new(capacity: usize) -> ArrayResult<Self> {
        Self::with_factory(capacity, T::default)
    }

    /// Creates a pool sized by the `name` entry of `config`.
    ///
    /// Unknown names use the configured default capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ZeroCapacity`] if the resolved capacity is zero
    /// and [`ArrayError::AllocationFailed`] if it cannot be reserved.
    pub fn from_config(config: &PoolConfig, name: &str) -> ArrayResult<Self> {
        Self::new(config.capacity_for(name))
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObjectPool<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectPool")
            .field("capacity", &self.capacity())
            .field("available", &self.available_count())
            .finish()
    }
}
