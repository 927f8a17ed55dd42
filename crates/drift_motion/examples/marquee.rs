//! Testimonial Marquee Demo
//!
//! Drives three auto-scrolling columns the way a testimonial feed does:
//! alternating directions, a different period per column, and a simulated
//! hover that pauses the first column mid-run and resumes it later.
//!
//! Run with: cargo run -p drift_motion --example marquee

use drift_motion::{FrameClock, MotionScheduler, Result, ScrollDirection, ScrollSet};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let scheduler = MotionScheduler::new();
    let clock = FrameClock::start();

    // Four cards per column; the rendered list is this sequence twice over
    let cards = ScrollSet::from_extents([180.0, 220.0, 200.0, 190.0]);

    let columns = [
        scheduler.scroller(cards.total_extent(), 25000.0, ScrollDirection::Up)?,
        scheduler.scroller(cards.total_extent(), 30000.0, ScrollDirection::Down)?,
        scheduler.scroller(cards.total_extent(), 35000.0, ScrollDirection::Up)?,
    ];

    for frame in 0..180u32 {
        if frame == 50 {
            tracing::info!("hover enter: pausing column 0");
            columns[0].pause();
        }
        if frame == 120 {
            tracing::info!("hover leave: resuming column 0");
            columns[0].resume();
        }

        scheduler.tick(clock.now_ms());

        if frame % 30 == 0 {
            let offsets: Vec<f32> = columns.iter().map(|c| c.offset()).collect();
            let top_card = cards.item_at(-offsets[0]);
            tracing::info!(frame, ?offsets, ?top_card, "marquee state");
        }

        std::thread::sleep(std::time::Duration::from_millis(16));
    }

    for column in &columns {
        column.cancel();
    }
    scheduler.tick(clock.now_ms());

    tracing::info!(tasks = scheduler.task_count(), "done");
    Ok(())
}
