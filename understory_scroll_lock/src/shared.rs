// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-wide lock that binds its surface on first use.
//!
//! A page has one scrollable body, so every overlay on the UI thread shares a
//! single [`LazyScrollLock`]. The surface is looked up through a constructor
//! function the first time any operation needs it; when the constructor finds
//! nothing (no document body), the operation logs and does nothing, and the
//! lookup is retried next time.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use understory_scroll_lock::{LazyScrollLock, ScrollLockGuard, ScrollSurface};
//! # #[derive(Debug, Default)]
//! # struct Body { overflow: String, padding_right: String }
//! # impl ScrollSurface for Body {
//! #     fn overflow(&self) -> String { self.overflow.clone() }
//! #     fn set_overflow(&mut self, v: &str) { self.overflow = v.into(); }
//! #     fn padding_right(&self) -> String { self.padding_right.clone() }
//! #     fn set_padding_right(&mut self, v: &str) { self.padding_right = v.into(); }
//! #     fn scrollbar_width(&self) -> f64 { 0.0 }
//! # }
//!
//! fn body() -> Option<Body> {
//!     Some(Body::default())
//! }
//!
//! let page = Rc::new(RefCell::new(LazyScrollLock::new(body)));
//! let dialog = ScrollLockGuard::acquire(Rc::clone(&page));
//! assert_eq!(page.borrow().count(), 1);
//! drop(dialog);
//! assert_eq!(page.borrow().count(), 0);
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::lock::{ScrollLock, ScrollSurface};

/// A [`ScrollLock`] created on the first operation that can reach its surface.
///
/// Every mutating operation creates the lock if needed, so releasing before
/// anything was locked still writes the empty initial snapshot, clearing the
/// surface's inline `overflow` and `padding-right`.
#[derive(Debug)]
pub struct LazyScrollLock<S> {
    lock: Option<ScrollLock<S>>,
    surface: fn() -> Option<S>,
}

impl<S: ScrollSurface> LazyScrollLock<S> {
    /// Creates an empty slot that binds through `surface` on first use.
    pub const fn new(surface: fn() -> Option<S>) -> Self {
        Self {
            lock: None,
            surface,
        }
    }

    fn get_or_bind(&mut self) -> Option<&mut ScrollLock<S>> {
        if self.lock.is_none() {
            let Some(surface) = (self.surface)() else {
                tracing::warn!("no scroll surface available; scroll lock ignored");
                return None;
            };
            self.lock = Some(ScrollLock::new(surface));
        }
        self.lock.as_mut()
    }

    /// See [`ScrollLock::acquire`].
    pub fn acquire(&mut self) {
        if let Some(lock) = self.get_or_bind() {
            lock.acquire();
        }
    }

    /// See [`ScrollLock::release`].
    pub fn release(&mut self) {
        if let Some(lock) = self.get_or_bind() {
            lock.release();
        }
    }

    /// See [`ScrollLock::force_release`].
    pub fn force_release(&mut self) {
        if let Some(lock) = self.get_or_bind() {
            lock.force_release();
        }
    }

    /// Number of current lock holders; zero before the lock exists.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lock.as_ref().map_or(0, ScrollLock::count)
    }

    /// The bound lock, if any operation has created it yet.
    #[must_use]
    pub fn get(&self) -> Option<&ScrollLock<S>> {
        self.lock.as_ref()
    }
}

/// Holds one lock on a shared [`LazyScrollLock`] until dropped.
///
/// The guard keeps the shared slot alive and is tied to the thread that
/// created it.
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScrollLockGuard<S: ScrollSurface> {
    lock: Rc<RefCell<LazyScrollLock<S>>>,
}

impl<S: ScrollSurface> ScrollLockGuard<S> {
    /// Acquires a lock on `lock` and returns the guard that releases it.
    pub fn acquire(lock: Rc<RefCell<LazyScrollLock<S>>>) -> Self {
        lock.borrow_mut().acquire();
        Self { lock }
    }
}

impl<S: ScrollSurface> Drop for ScrollLockGuard<S> {
    fn drop(&mut self) {
        self.lock.borrow_mut().release();
    }
}
