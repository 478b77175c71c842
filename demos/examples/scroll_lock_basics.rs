// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll lock basics.
//!
//! Open a dialog, open a select inside it, and close them in both orders,
//! printing the page style after each step.
//!
//! Run:
//! - `cargo run -p understory_demos --example scroll_lock_basics`

use understory_demos::{HeadlessPage, init_tracing};
use understory_scroll_lock::ScrollLock;

fn report(step: &str, lock: &ScrollLock<HeadlessPage>) {
    let page = lock.surface();
    println!(
        "{step:<16} count={} overflow={:?} padding-right={:?}",
        lock.count(),
        page.overflow,
        page.padding_right
    );
}

fn main() {
    init_tracing();

    let mut lock = ScrollLock::new(HeadlessPage::with_scrollbar(15.0));
    report("initial", &lock);

    lock.acquire();
    report("dialog open", &lock);
    lock.acquire();
    report("select open", &lock);
    lock.release();
    report("select closed", &lock);
    lock.release();
    report("dialog closed", &lock);

    // The dialog closes first this time; the select still holds the lock.
    lock.acquire();
    lock.acquire();
    lock.release();
    report("dialog closed", &lock);

    // The select unmounts without releasing; teardown forces the unlock.
    lock.force_release();
    report("forced", &lock);
}
