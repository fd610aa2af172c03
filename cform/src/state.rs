use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Shared state cell with interior mutability.
///
/// `State<T>` is cheap to clone: every clone points at the same value. Each
/// write bumps a revision counter so a view can tell whether it needs to
/// redraw since the revision it last rendered.
///
/// # Example
///
/// ```
/// use cform::state::State;
///
/// let errors = State::new(0u32);
/// let before = errors.revision();
/// errors.update(|n| *n += 1);
/// assert_eq!(errors.get(), 1);
/// assert!(errors.changed_since(before));
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    revision: Arc<AtomicU64>,
}

impl<T> State<T> {
    /// Create a new state holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            revision: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Read the current value through a closure without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self
            .inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        self.update(|v| *v = value);
    }

    /// Mutate the value in place and return whatever the closure returns.
    ///
    /// The revision is bumped even if the closure leaves the value as is.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let out = f(&mut guard);
        self.revision.fetch_add(1, Ordering::SeqCst);
        out
    }

    /// Mutate the value only if the closure reports that it did so.
    ///
    /// The closure runs under the write lock, so a check and the write that
    /// depends on it cannot interleave with another writer. Returns the
    /// closure's verdict; the revision is bumped only when it is `true`.
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let written = f(&mut guard);
        if written {
            self.revision.fetch_add(1, Ordering::SeqCst);
        }
        written
    }

    /// Number of writes made so far.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Whether the value was written after `revision` was observed.
    pub fn changed_since(&self, revision: u64) -> bool {
        self.revision() != revision
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            revision: Arc::clone(&self.revision),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
