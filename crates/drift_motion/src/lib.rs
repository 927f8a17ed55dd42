//! Drift Motion Engine
//!
//! Periodic, time-driven values for decorative UI animation.
//!
//! # Features
//!
//! - **Arc-Length Followers**: a coordinate sweeping a closed outline at
//!   constant speed, one lap per period
//! - **Looped Scrollers**: a seamless infinite offset for doubled item
//!   lists, with hover-driven pause/resume
//! - **Pause Continuity**: a paused value freezes bit-for-bit and resumes
//!   with no catch-up jump, however long it was held
//! - **Frame Scheduler**: host-driven `tick(now)` registry; one broken
//!   task is cancelled and logged without disturbing the rest
//! - **Fail-Fast Configs**: tagged config records validated exhaustively
//!   before anything is registered
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use drift_core::RoundedRect;
//! use drift_motion::{FrameClock, MotionScheduler, ScrollDirection};
//!
//! let scheduler = MotionScheduler::new();
//! let clock = FrameClock::start();
//!
//! // A highlight lapping a card outline every 3 seconds
//! let highlight = scheduler
//!     .follower(Arc::new(RoundedRect::new(240.0, 80.0, 24.0)), 3000.0)
//!     .unwrap();
//!
//! // A testimonial column scrolling one full copy every 25 seconds
//! let column = scheduler.scroller(480.0, 25000.0, ScrollDirection::Up).unwrap();
//!
//! // Host render loop: one tick per frame, then read and paint
//! scheduler.tick(clock.now_ms());
//! let _xy = highlight.position();
//! let _dy = column.offset();
//!
//! // Hover handling is the host's: enter pauses, leave resumes
//! column.pause();
//! column.resume();
//! ```

pub mod error;
pub mod follower;
pub mod scheduler;
pub mod scroller;
pub mod task;

pub use error::{ConfigError, Result};
pub use follower::{ArcConfig, Sweep, DEFAULT_PERIOD_MS};
pub use scheduler::{
    FollowerHandle, FrameClock, MotionScheduler, SchedulerHandle, ScrollerHandle, TaskHandle,
    TaskId,
};
pub use scroller::{ScrollConfig, ScrollDirection, ScrollSet};
pub use task::{MotionConfig, MotionOutput, TaskState};
