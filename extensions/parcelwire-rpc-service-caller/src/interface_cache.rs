use once_cell::sync::OnceCell;

/// What a proxy has learned about the remote's interface revision.
///
/// Each value is fetched at most once per proxy. Concurrent first callers
/// of the same value wait for the one round trip instead of racing their
/// own; a cached value is returned without waiting on anything. A fetch
/// that fails or panics leaves its value unset for the next caller.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InterfaceCache {
    version: OnceCell<i32>,
    hash: OnceCell<String>,
}

impl InterfaceCache {
    pub fn version(&self) -> Option<i32> {
        self.version.get().copied()
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.get().map(String::as_str)
    }

    pub fn version_or_fetch<F, E>(&self, fetch: F) -> Result<i32, E>
    where
        F: FnOnce() -> Result<i32, E>,
    {
        self.version.get_or_try_init(fetch).copied()
    }

    pub fn hash_or_fetch<F, E>(&self, fetch: F) -> Result<String, E>
    where
        F: FnOnce() -> Result<String, E>,
    {
        self.hash.get_or_try_init(fetch).cloned()
    }
}
