//! Border Sweep Demo
//!
//! A highlight lapping the rounded-rectangle outline of a button, the
//! decoration behind an animated border: one full lap every 3 seconds,
//! re-sampled each frame.
//!
//! Run with: cargo run -p drift_motion --example border_sweep

use std::sync::Arc;

use drift_core::RoundedRect;
use drift_motion::{FrameClock, MotionScheduler, Result, DEFAULT_PERIOD_MS};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let scheduler = MotionScheduler::new();
    let clock = FrameClock::start();

    let outline = Arc::new(RoundedRect::new(240.0, 80.0, 24.0));
    let highlight = scheduler.follower(outline, DEFAULT_PERIOD_MS)?;

    // Roughly one and a half laps at 60fps
    for frame in 0..280u32 {
        scheduler.tick(clock.now_ms());

        if frame % 20 == 0 {
            let p = highlight.position();
            tracing::info!(frame, x = p.x, y = p.y, "highlight");
        }

        std::thread::sleep(std::time::Duration::from_millis(16));
    }

    highlight.cancel();
    scheduler.tick(clock.now_ms());
    Ok(())
}
