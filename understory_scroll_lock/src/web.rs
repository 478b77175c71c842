// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend: locks `document.body`.
//!
//! The page has a single body, so its lock lives in one thread-local
//! [`LazyScrollLock`] shared by every overlay on the UI thread. It binds to
//! the body on the first lock or unlock call and is kept for the life of the
//! thread. An unlock before anything was ever locked clears the body's inline
//! `overflow` and `padding-right`.
//!
//! ```no_run
//! use understory_scroll_lock::web::{body_lock_count, body_scroll_guard};
//!
//! let guard = body_scroll_guard();
//! assert_eq!(body_lock_count(), 1);
//! drop(guard);
//! assert_eq!(body_lock_count(), 0);
//! ```

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use std::thread_local;

use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

use crate::lock::ScrollSurface;
use crate::shared::{LazyScrollLock, ScrollLockGuard};

/// [`ScrollSurface`] over `document.body`'s inline style.
#[derive(Clone, Debug)]
pub struct BodySurface {
    window: Window,
    body: HtmlElement,
}

impl BodySurface {
    /// Binds to the current window's body, if there is one.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let body = window.document()?.body()?;
        Some(Self { window, body })
    }

    fn read(&self, property: &str) -> String {
        self.body
            .style()
            .get_property_value(property)
            .unwrap_or_else(|err| {
                log_js_error("read", property, &err);
                String::new()
            })
    }

    fn write(&self, property: &str, value: &str) {
        if let Err(err) = self.body.style().set_property(property, value) {
            log_js_error("write", property, &err);
        }
    }
}

impl ScrollSurface for BodySurface {
    fn overflow(&self) -> String {
        self.read("overflow")
    }

    fn set_overflow(&mut self, value: &str) {
        self.write("overflow", value);
    }

    fn padding_right(&self) -> String {
        self.read("padding-right")
    }

    fn set_padding_right(&mut self, value: &str) {
        self.write("padding-right", value);
    }

    fn scrollbar_width(&self) -> f64 {
        let inner = self
            .window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let client = self
            .window
            .document()
            .and_then(|doc| doc.document_element())
            .map_or(inner, |root| f64::from(root.client_width()));
        inner - client
    }
}

fn log_js_error(op: &str, property: &str, err: &JsValue) {
    tracing::warn!(op, property, ?err, "body style access failed");
}

thread_local! {
    static BODY_LOCK: Rc<RefCell<LazyScrollLock<BodySurface>>> =
        Rc::new(RefCell::new(LazyScrollLock::new(BodySurface::from_window)));
}

/// The page-wide body lock shared by every overlay on this thread.
#[must_use]
pub fn body_lock() -> Rc<RefCell<LazyScrollLock<BodySurface>>> {
    BODY_LOCK.with(Rc::clone)
}

/// Locks body scroll, or adds a holder to an existing lock.
///
/// Without a document body (for example in a worker) this logs and does
/// nothing.
pub fn lock_body_scroll() {
    BODY_LOCK.with(|lock| lock.borrow_mut().acquire());
}

/// Removes a holder, restoring body scroll when none remain.
pub fn unlock_body_scroll() {
    BODY_LOCK.with(|lock| lock.borrow_mut().release());
}

/// Restores body scroll and drops every holder.
pub fn force_unlock_body_scroll() {
    BODY_LOCK.with(|lock| lock.borrow_mut().force_release());
}

/// Number of current body scroll lock holders.
#[must_use]
pub fn body_lock_count() -> usize {
    BODY_LOCK.with(|lock| lock.borrow().count())
}

/// Holds a body scroll lock until dropped.
pub type BodyScrollGuard = ScrollLockGuard<BodySurface>;

/// Locks body scroll and returns the guard that releases it.
pub fn body_scroll_guard() -> BodyScrollGuard {
    ScrollLockGuard::acquire(body_lock())
}
