use toi::Rectangle;

// Run with `RUST_LOG=debug cargo run --example rectangles [-- "l -> r; t -> b" "l -> r; t -> b"]`.
fn main() -> toi::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (a, b) = match args.as_slice() {
        [a, b] => (a.parse()?, b.parse()?),
        [] => (
            Rectangle::new(10, 20, 30, 40),
            Rectangle::new(15, 25, 35, 45),
        ),
        _ => {
            log::error!("expected zero or two rectangles, got {}", args.len());
            std::process::exit(2);
        }
    };

    a.log_debug("a");
    b.log_debug("b");

    let intersection = a.intersection(b);
    intersection.log_debug("intersection");
    if !intersection.is_valid() {
        log::info!("{a} and {b} do not overlap");
    }
    a.bounding(b).log_debug("bounding");
    log::info!("equal: {}", a.equals(b));

    for (x, y) in corners(a) {
        log::info!("a contains ({x}, {y}): {}", a.contains_point(x, y));
    }

    Ok(())
}

/// Corner pixels of `rect`, inclusive top-left and exclusive bottom-right.
fn corners(rect: Rectangle) -> [(i32, i32); 4] {
    [
        (rect.left, rect.top),
        (rect.right, rect.top),
        (rect.left, rect.bottom),
        (rect.right.saturating_sub(1), rect.bottom.saturating_sub(1)),
    ]
}
