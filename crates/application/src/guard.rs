//! Scoped ownership of a response resource.

use std::ops::{Deref, DerefMut};

use crate::ports::ResponseResource;

/// Owns a response and releases it exactly once, at the latest on drop.
///
/// Early returns through `?` drop the guard, so the connection goes back to
/// the client on every path, including decode failures.
#[derive(Debug)]
pub struct ResponseGuard<R: ResponseResource> {
    inner: R,
    released: bool,
}

impl<R: ResponseResource> ResponseGuard<R> {
    /// Takes ownership of a freshly acquired response.
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            released: false,
        }
    }

    /// Releases the response now. Later calls and the drop are no-ops.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.inner.release();
        }
    }

    /// Returns true once the response has been released.
    #[must_use]
    pub const fn is_released(&self) -> bool {
        self.released
    }
}

impl<R: ResponseResource> Deref for ResponseGuard<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.inner
    }
}

impl<R: ResponseResource> DerefMut for ResponseGuard<R> {
    fn deref_mut(&mut self) -> &mut R {
        &mut self.inner
    }
}

impl<R: ResponseResource> Drop for ResponseGuard<R> {
    fn drop(&mut self) {
        self.release();
    }
}
