//! Instance recycling for generated message types.
//!
//! A [`Pool`] is a hand-off shelf, not a cache of shared objects: releasing
//! an instance transfers exclusive ownership to the pool, and acquiring one
//! transfers exclusive ownership to the caller. Retained heap capacity
//! inside a recycled instance is an invisible performance detail — every
//! acquired instance reads as freshly cleared, because [`Pool::release`]
//! runs [`Recycle::reset_for_reuse`] before shelving.
//!
//! Generated code exposes one `static` pool per pool-eligible message type
//! through [`Recycle::pool`]; callers that want an explicitly owned pool
//! (per subsystem, per test) can construct their own with [`Pool::new`] and
//! pass it around instead.
use std::sync::{Mutex, PoisonError};

/// A concurrency-safe shelf of reusable instances of one message type.
pub struct Pool<T> {
    shelf: Mutex<Vec<T>>,
}

impl<T> Pool<T> {
    /// An empty pool. `const` so generated code can place one in a `static`.
    pub const fn new() -> Self {
        Pool {
            shelf: Mutex::new(Vec::new()),
        }
    }

    /// Number of instances currently shelved.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
        // A panic while holding the lock leaves only a Vec of idle
        // instances behind; the shelf content stays valid.
        self.shelf.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Recycle> Pool<T> {
    /// Pop a recycled instance, or allocate a fresh one if the shelf is
    /// empty. The returned instance reads as cleared either way.
    pub fn acquire(&self) -> T {
        self.lock().pop().unwrap_or_default()
    }

    /// Reset `value` for reuse and shelve it.
    ///
    /// Ownership moves into the pool; the type system prevents the caller
    /// from touching the instance afterwards.
    pub fn release(&self, mut value: T) {
        value.reset_for_reuse();
        self.lock().push(value);
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Pool::new()
    }
}

/// Message types that can be recycled through a [`Pool`].
///
/// Implementations are generated: `reset_for_reuse` clears every field
/// back to its logical default while retaining allocated backing storage
/// where the wire shape allows it (repeated containers, byte buffers,
/// oneof byte variants), and recursively recycles pool-eligible nested
/// messages into their own pools.
pub trait Recycle: Default + Sized + 'static {
    /// Clear all fields to their logical defaults, keeping reusable
    /// backing storage.
    fn reset_for_reuse(&mut self);

    /// The process-wide default pool for this message type.
    fn pool() -> &'static Pool<Self>;

    /// Acquire an instance from the default pool.
    fn acquire() -> Self {
        Self::pool().acquire()
    }

    /// Reset this instance and return it to the default pool.
    fn recycle(self) {
        Self::pool().release(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, PartialEq, Debug)]
    struct Sample {
        data: Vec<u8>,
    }

    static SAMPLE_POOL: Pool<Sample> = Pool::new();

    impl Recycle for Sample {
        fn reset_for_reuse(&mut self) {
            self.data.clear();
        }

        fn pool() -> &'static Pool<Self> {
            &SAMPLE_POOL
        }
    }

    #[test]
    fn release_resets_and_acquire_reuses_capacity() {
        let pool = Pool::new();
        let mut s = Sample::default();
        s.data.reserve_exact(64);
        s.data.extend_from_slice(b"abc");
        let cap = s.data.capacity();

        pool.release(s);
        assert_eq!(pool.len(), 1);

        let s = pool.acquire();
        assert!(s.data.is_empty());
        assert_eq!(s.data.capacity(), cap);
        assert!(pool.is_empty());
    }

    #[test]
    fn acquire_from_empty_allocates_fresh() {
        let pool: Pool<Sample> = Pool::new();
        assert_eq!(pool.acquire(), Sample::default());
    }

    #[test]
    fn concurrent_handoff_never_shares() {
        use std::sync::Arc;

        let pool = Arc::new(Pool::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let pool = Arc::clone(&pool);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let mut s: Sample = pool.acquire();
                        assert!(s.data.is_empty());
                        s.data.extend_from_slice(b"busy");
                        pool.release(s);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
