// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll_lock --heading-base-level=0

//! Understory Scroll Lock: keep the page from scrolling behind open overlays.
//!
//! Modals, dropdowns and menus usually disable background scrolling while
//! they are open. Several of them can be open at once (a select inside a
//! dialog), and they close in arbitrary order, so a simple on/off flag breaks
//! as soon as the inner overlay closes first. [`ScrollLock`] counts holders
//! instead:
//!
//! - The first [`ScrollLock::acquire`] snapshots the surface's inline
//!   `overflow` and `padding-right`, sets `overflow: hidden`, and pads the
//!   right edge by the scrollbar width so content does not shift.
//! - Further acquires only bump the count.
//! - The [`ScrollLock::release`] that brings the count to zero restores the
//!   snapshot. Extra releases are absorbed; the count never goes negative.
//! - [`ScrollLock::force_release`] resets everything for teardown paths that
//!   lost track of their holders.
//!
//! The page itself is abstracted as a [`ScrollSurface`], so the counting
//! logic is testable without a browser. A [`LazyScrollLock`] binds its
//! surface on first use and is shared between overlays through
//! [`ScrollLockGuard`]s. On `wasm32` the `web` module provides the
//! `document.body` surface and the single page-wide lock.
//!
//! Like the rest of Understory, this crate does not decide when overlays open
//! or close; callers acquire on open and release on close or unmount.
//!
//! This crate is `no_std` and uses `alloc`; the `web` module uses `std`.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
extern crate std;

mod lock;
mod shared;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use lock::{LOCKED_OVERFLOW, ScrollLock, ScrollSurface, StyleSnapshot};
pub use shared::{LazyScrollLock, ScrollLockGuard};
