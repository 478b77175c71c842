// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

/// Inline `overflow` value applied while locked.
pub const LOCKED_OVERFLOW: &str = "hidden";

/// The scrollable page surface a [`ScrollLock`] writes to.
///
/// On the web this is `document.body`'s inline style plus the window's
/// scrollbar width. Values are raw CSS strings; an empty string means the
/// inline property is unset.
pub trait ScrollSurface {
    /// Current inline `overflow` value.
    fn overflow(&self) -> String;
    /// Sets the inline `overflow` value.
    fn set_overflow(&mut self, value: &str);
    /// Current inline `padding-right` value.
    fn padding_right(&self) -> String;
    /// Sets the inline `padding-right` value.
    fn set_padding_right(&mut self, value: &str);
    /// Width of the vertical scrollbar in pixels, or `0.0` when there is none.
    fn scrollbar_width(&self) -> f64;
}

/// Inline style values captured when a lock window opens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSnapshot {
    /// `padding-right` before locking.
    pub padding_right: String,
    /// `overflow` before locking.
    pub overflow: String,
}

impl StyleSnapshot {
    fn capture<S: ScrollSurface + ?Sized>(surface: &S) -> Self {
        Self {
            padding_right: surface.padding_right(),
            overflow: surface.overflow(),
        }
    }

    fn restore<S: ScrollSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_padding_right(&self.padding_right);
        surface.set_overflow(&self.overflow);
    }
}

/// Reference-counted scroll lock over a [`ScrollSurface`].
///
/// Each open overlay calls [`acquire`](Self::acquire) once and
/// [`release`](Self::release) once. Only the first acquire of a lock window
/// touches the surface (snapshot, then `overflow: hidden` and scrollbar
/// compensation) and only the release that brings the count back to zero
/// restores it, so overlays may open and close in any interleaving.
///
/// ```
/// # use understory_scroll_lock::{ScrollLock, ScrollSurface};
/// # #[derive(Default)]
/// # struct Body { overflow: String, padding_right: String }
/// # impl ScrollSurface for Body {
/// #     fn overflow(&self) -> String { self.overflow.clone() }
/// #     fn set_overflow(&mut self, v: &str) { self.overflow = v.into(); }
/// #     fn padding_right(&self) -> String { self.padding_right.clone() }
/// #     fn set_padding_right(&mut self, v: &str) { self.padding_right = v.into(); }
/// #     fn scrollbar_width(&self) -> f64 { 15.0 }
/// # }
/// let mut lock = ScrollLock::new(Body::default());
///
/// lock.acquire(); // dialog opens
/// lock.acquire(); // dropdown inside it opens
/// lock.release(); // dropdown closes
/// assert_eq!(lock.count(), 1);
/// assert_eq!(lock.surface().overflow, "hidden");
/// assert_eq!(lock.surface().padding_right, "15px");
///
/// lock.release(); // dialog closes
/// assert_eq!(lock.count(), 0);
/// assert_eq!(lock.surface().overflow, "");
/// ```
#[derive(Debug)]
pub struct ScrollLock<S> {
    surface: S,
    count: usize,
    snapshot: StyleSnapshot,
}

impl<S: ScrollSurface> ScrollLock<S> {
    /// Creates an unlocked coordinator for `surface`.
    ///
    /// The snapshot starts out empty, so a [`force_release`](Self::force_release)
    /// before any acquire clears both inline properties.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            count: 0,
            snapshot: StyleSnapshot::default(),
        }
    }

    /// Adds a lock holder, locking the surface if this is the first one.
    pub fn acquire(&mut self) {
        self.count += 1;
        if self.count > 1 {
            tracing::trace!(count = self.count, "nested scroll lock acquired");
            return;
        }

        self.snapshot = StyleSnapshot::capture(&self.surface);
        let scrollbar_width = self.surface.scrollbar_width();
        if scrollbar_width > 0.0 {
            self.surface.set_padding_right(&format!("{scrollbar_width}px"));
        }
        self.surface.set_overflow(LOCKED_OVERFLOW);
        tracing::debug!(scrollbar_width, "scroll locked");
    }

    /// Removes a lock holder, restoring the surface when none remain.
    ///
    /// Releasing with no holders keeps the count at zero and re-applies the
    /// last snapshot.
    pub fn release(&mut self) {
        if self.count == 0 {
            tracing::warn!("scroll lock released more times than acquired");
        }
        self.count = self.count.saturating_sub(1);
        if self.count == 0 {
            self.snapshot.restore(&mut self.surface);
            tracing::debug!("scroll unlocked");
        } else {
            tracing::trace!(count = self.count, "nested scroll lock released");
        }
    }

    /// Drops all holders and restores the surface regardless of the count.
    ///
    /// Meant for teardown paths where an overlay went away without releasing.
    pub fn force_release(&mut self) {
        if self.count > 0 {
            tracing::warn!(count = self.count, "forcing scroll unlock");
        }
        self.count = 0;
        self.snapshot.restore(&mut self.surface);
    }

    /// Number of current lock holders.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` while at least one holder exists.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.count > 0
    }

    /// Style values that will be restored when the lock window closes.
    #[must_use]
    pub fn snapshot(&self) -> &StyleSnapshot {
        &self.snapshot
    }

    /// Read access to the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the lock and returns the surface as is, without restoring.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{ScrollLock, ScrollSurface};

    struct Body {
        overflow: String,
        padding_right: String,
        scrollbar: f64,
        writes: Vec<(&'static str, String)>,
    }

    impl ScrollSurface for Body {
        fn overflow(&self) -> String {
            self.overflow.clone()
        }
        fn set_overflow(&mut self, value: &str) {
            self.writes.push(("overflow", value.into()));
            self.overflow = value.into();
        }
        fn padding_right(&self) -> String {
            self.padding_right.clone()
        }
        fn set_padding_right(&mut self, value: &str) {
            self.writes.push(("padding-right", value.into()));
            self.padding_right = value.into();
        }
        fn scrollbar_width(&self) -> f64 {
            self.scrollbar
        }
    }

    fn body(overflow: &str, padding_right: &str, scrollbar: f64) -> Body {
        Body {
            overflow: overflow.into(),
            padding_right: padding_right.into(),
            scrollbar,
            writes: Vec::new(),
        }
    }

    #[test]
    fn first_acquire_locks_and_compensates_scrollbar() {
        let mut lock = ScrollLock::new(body("auto", "4px", 17.0));
        lock.acquire();

        assert_eq!(lock.count(), 1);
        assert!(lock.is_locked());
        assert_eq!(lock.surface().overflow, "hidden");
        assert_eq!(lock.surface().padding_right, "17px");
        assert_eq!(lock.snapshot().overflow, "auto");
        assert_eq!(lock.snapshot().padding_right, "4px");
    }

    #[test]
    fn no_padding_without_scrollbar() {
        let mut lock = ScrollLock::new(body("", "", 0.0));
        lock.acquire();
        assert_eq!(lock.surface().overflow, "hidden");
        assert_eq!(lock.surface().padding_right, "");
        assert_eq!(lock.surface().writes.len(), 1);
    }

    #[test]
    fn nested_acquire_does_not_write() {
        let mut lock = ScrollLock::new(body("", "", 15.0));
        lock.acquire();
        let writes = lock.surface().writes.len();
        lock.acquire();
        lock.acquire();
        assert_eq!(lock.count(), 3);
        assert_eq!(lock.surface().writes.len(), writes);
    }

    #[test]
    fn acquire_acquire_release_keeps_lock() {
        let mut lock = ScrollLock::new(body("scroll", "", 15.0));
        lock.acquire();
        lock.acquire();
        lock.release();
        assert_eq!(lock.count(), 1);
        assert_eq!(lock.surface().overflow, "hidden");

        lock.release();
        assert_eq!(lock.count(), 0);
        assert_eq!(lock.surface().overflow, "scroll");
        assert_eq!(lock.surface().padding_right, "");
    }

    #[test]
    fn excess_release_is_floored_and_restores() {
        let mut lock = ScrollLock::new(body("auto", "", 0.0));
        lock.release();
        assert_eq!(lock.count(), 0);
        // Restores the empty initial snapshot.
        assert_eq!(lock.surface().overflow, "");

        let mut lock = ScrollLock::new(body("auto", "", 0.0));
        lock.acquire();
        lock.release();
        lock.release();
        assert_eq!(lock.count(), 0);
        assert_eq!(lock.surface().overflow, "auto");
    }

    #[test]
    fn force_release_resets_count_and_style() {
        let mut lock = ScrollLock::new(body("visible", "2px", 12.0));
        lock.acquire();
        lock.acquire();
        lock.force_release();
        assert_eq!(lock.count(), 0);
        assert_eq!(lock.surface().overflow, "visible");
        assert_eq!(lock.surface().padding_right, "2px");

        // A new window snapshots again.
        lock.acquire();
        assert_eq!(lock.surface().overflow, "hidden");
        lock.release();
        assert_eq!(lock.surface().overflow, "visible");
    }

    #[test]
    fn fractional_scrollbar_width() {
        let mut lock = ScrollLock::new(body("", "", 15.5));
        lock.acquire();
        assert_eq!(lock.surface().padding_right, "15.5px");
    }
}
