//! Node payload ownership.
//!
//! Each node owns exactly one payload. A caller may attach a release closure when the node
//! is created; the closure receives the payload by value when the node is deleted, when the
//! graph is reset, or when the graph is dropped. It runs at most once because
//! [`Payload::release`] consumes the slot.

use std::fmt;

/// Caller supplied destructor for a node payload.
pub type ReleaseFn<T> = Box<dyn FnOnce(T) + Send + Sync>;

/// A node payload together with its optional release closure.
pub(crate) struct Payload<T> {
    data: T,
    release: Option<ReleaseFn<T>>,
}

impl<T> Payload<T> {
    pub(crate) fn new(data: T) -> Self {
        Payload {
            data,
            release: None,
        }
    }

    pub(crate) fn with_release(data: T, release: ReleaseFn<T>) -> Self {
        Payload {
            data,
            release: Some(release),
        }
    }

    pub(crate) fn get(&self) -> &T {
        &self.data
    }

    pub(crate) fn get_mut(&mut self) -> &mut T {
        &mut self.data
    }

    #[cfg(test)]
    pub(crate) fn has_release(&self) -> bool {
        self.release.is_some()
    }

    /// Hands the payload to its release closure, or drops it if there is none.
    pub(crate) fn release(self) {
        if let Some(release) = self.release {
            release(self.data);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Payload<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("data", &self.data)
            .field("release", &self.release.is_some())
            .finish()
    }
}
