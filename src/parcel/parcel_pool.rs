use crate::{constants::DEFAULT_PARCEL_POOL_SIZE, parcel::Parcel};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

/// A bounded stash of cleared parcels, so per-call request and reply
/// buffers can reuse their allocations.
///
/// Parcels are handed out as [`PooledParcel`] guards which clear and return
/// the parcel when dropped, on every exit path of the call that held them.
#[derive(Debug)]
pub struct ParcelPool {
    free: Mutex<Vec<Parcel>>,
    capacity: usize,
}

impl Default for ParcelPool {
    fn default() -> Self {
        Self::new(DEFAULT_PARCEL_POOL_SIZE)
    }
}

impl ParcelPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    /// Takes a cleared parcel from the pool, or a new one if it is empty.
    pub fn obtain(&self) -> PooledParcel<'_> {
        let parcel = self
            .free
            .lock()
            .ok()
            .and_then(|mut free| free.pop())
            .unwrap_or_default();

        PooledParcel { pool: self, parcel }
    }

    /// Number of parcels currently waiting for reuse.
    pub fn available(&self) -> usize {
        self.free.lock().map(|free| free.len()).unwrap_or(0)
    }

    fn recycle(&self, mut parcel: Parcel) {
        parcel.clear();

        // A poisoned pool just stops recycling; the parcel is dropped.
        if let Ok(mut free) = self.free.lock() {
            if free.len() < self.capacity {
                free.push(parcel);
            }
        }
    }
}

/// A parcel on loan from a [`ParcelPool`].
pub struct PooledParcel<'a> {
    pool: &'a ParcelPool,
    parcel: Parcel,
}

impl fmt::Debug for PooledParcel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PooledParcel").field(&self.parcel).finish()
    }
}

impl Deref for PooledParcel<'_> {
    type Target = Parcel;

    fn deref(&self) -> &Parcel {
        &self.parcel
    }
}

impl DerefMut for PooledParcel<'_> {
    fn deref_mut(&mut self) -> &mut Parcel {
        &mut self.parcel
    }
}

impl Drop for PooledParcel<'_> {
    fn drop(&mut self) {
        self.pool.recycle(std::mem::take(&mut self.parcel));
    }
}
