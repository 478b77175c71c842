// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics.
//!
//! Position a dropdown under three triggers in an 800x600 viewport and print
//! the resulting inline styles.
//!
//! Run:
//! - `cargo run -p understory_demos --example placement_basics`

use kurbo::{Rect, Size};
use understory_demos::init_tracing;
use understory_placement::{Align, Floating, PlacementOptions, PlacementRequest, compute_placement};

fn main() {
    init_tracing();

    let viewport = Size::new(800.0, 600.0);
    let panel = Rect::new(0.0, 0.0, 220.0, 260.0);

    let triggers = [
        ("top-left button", Rect::new(16.0, 16.0, 116.0, 48.0), Align::Start),
        ("right toolbar menu", Rect::new(720.0, 16.0, 784.0, 48.0), Align::End),
        ("footer select", Rect::new(300.0, 520.0, 500.0, 560.0), Align::Center),
    ];

    for (name, trigger, align) in triggers {
        let options = PlacementOptions::default().with_align(align);
        let request = PlacementRequest::new(trigger, panel, viewport).with_options(options);
        let result = compute_placement(&request);
        let style = result.to_style();
        println!(
            "{name}: placement={} top={} left={} min-width={}",
            result.placement.as_str(),
            style.top,
            style.left,
            style.min_width
        );
    }

    // Same footer select driven through the open/resize lifecycle.
    let trigger = Rect::new(300.0, 520.0, 500.0, 560.0);
    let mut floating = Floating::new(PlacementOptions::default());

    // First frame: the panel is not mounted yet.
    let mut measured_panel: Option<Rect> = None;
    floating.on_open_changed(true, &trigger, &measured_panel, viewport);
    println!("before measurement: {:?}", floating.style());

    // After layout the panel has a size.
    measured_panel = Some(panel);
    floating.on_resize(&trigger, &measured_panel, viewport);
    println!("after measurement: {:?}", floating.style());

    // The window grows taller, so the panel fits below again.
    floating.on_resize(&trigger, &measured_panel, Size::new(800.0, 1000.0));
    println!(
        "after resize: placement={} {:?}",
        floating.placement().as_str(),
        floating.style()
    );
}
