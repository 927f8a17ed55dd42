//! The shared motion task contract
//!
//! Every animated value in the engine is a [`MotionTask`]: a validated
//! configuration, a Running/Paused/Cancelled state machine, and an output
//! cached as a pure function of *accumulated active time*. Wall-clock time
//! only ever enters through `tick(now)` deltas, so a paused task holds its
//! value bit-for-bit and resumes exactly where it froze.

use std::sync::{Arc, Mutex};

use drift_core::Point;

use crate::error::Result;
use crate::follower::ArcConfig;
use crate::scroller::ScrollConfig;

/// Lifecycle state of a motion task
///
/// `Running → Paused → Running → … → Cancelled`. Cancelled is terminal and
/// reachable from any state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskState {
    #[default]
    Running,
    Paused,
    Cancelled,
}

/// Tagged configuration for a motion task, validated at construction
#[derive(Clone)]
pub enum MotionConfig {
    /// A coordinate sweeping a closed path
    Arc(ArcConfig),
    /// A 1-D offset for a doubled item list
    Scroll(ScrollConfig),
}

impl MotionConfig {
    /// Validate construction parameters exhaustively
    pub fn validate(&self) -> Result<()> {
        match self {
            MotionConfig::Arc(config) => config.validate(),
            MotionConfig::Scroll(config) => config.validate(),
        }
    }

    /// Output after `elapsed_ms` of active time
    pub fn sample(&self, elapsed_ms: f64) -> MotionOutput {
        match self {
            MotionConfig::Arc(config) => MotionOutput::Position(config.sample(elapsed_ms)),
            MotionConfig::Scroll(config) => MotionOutput::Offset(config.sample(elapsed_ms)),
        }
    }
}

impl From<ArcConfig> for MotionConfig {
    fn from(config: ArcConfig) -> Self {
        MotionConfig::Arc(config)
    }
}

impl From<ScrollConfig> for MotionConfig {
    fn from(config: ScrollConfig) -> Self {
        MotionConfig::Scroll(config)
    }
}

/// The current value of a motion task
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionOutput {
    /// A follower's coordinate
    Position(Point),
    /// A scroller's offset
    Offset(f32),
}

impl MotionOutput {
    pub fn as_position(&self) -> Option<Point> {
        match self {
            MotionOutput::Position(p) => Some(*p),
            MotionOutput::Offset(_) => None,
        }
    }

    pub fn as_offset(&self) -> Option<f32> {
        match self {
            MotionOutput::Offset(offset) => Some(*offset),
            MotionOutput::Position(_) => None,
        }
    }
}

/// Shared output cell, read by handles and written by ticks
pub type SharedOutput = Arc<Mutex<MotionOutput>>;

/// One periodic animated value
///
/// Owned by the scheduler's registry; hosts interact through handles.
/// A task only ever mutates its own state; nothing here can reach
/// another task.
pub struct MotionTask {
    state: TaskState,
    config: MotionConfig,
    /// Accumulated active milliseconds; frozen while paused
    elapsed_ms: f64,
    /// Timestamp of the previous tick; `None` right after spawn or resume,
    /// so the next tick contributes a zero delta instead of a catch-up jump
    last_tick: Option<f64>,
    output: SharedOutput,
}

impl MotionTask {
    /// Create a task in `Running` state with its output pre-sampled at
    /// elapsed zero. The config must already be validated.
    pub fn new(config: MotionConfig) -> Self {
        let output = Arc::new(Mutex::new(config.sample(0.0)));
        Self {
            state: TaskState::Running,
            config,
            elapsed_ms: 0.0,
            last_tick: None,
            output,
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TaskState::Running
    }

    /// Accumulated active time in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// The output cell shared with this task's handles
    pub fn shared_output(&self) -> SharedOutput {
        Arc::clone(&self.output)
    }

    /// Advance the task to `now_ms`
    ///
    /// Running: accumulate the delta since the previous tick and resample.
    /// Paused: do nothing. The output frozen at pause time is exactly the
    /// value the next running tick resumes from. Cancelled: do nothing.
    pub fn tick(&mut self, now_ms: f64) {
        if self.state != TaskState::Running {
            return;
        }

        if let Some(last) = self.last_tick {
            self.elapsed_ms += now_ms - last;
        }
        self.last_tick = Some(now_ms);

        let sampled = self.config.sample(self.elapsed_ms);
        *self.output.lock().unwrap() = sampled;
    }

    /// `Running → Paused`; idempotent, no effect once cancelled
    pub fn pause(&mut self) {
        if self.state == TaskState::Running {
            self.state = TaskState::Paused;
        }
    }

    /// `Paused → Running`; clears the previous tick timestamp so the time
    /// spent paused never enters the accumulated active time
    pub fn resume(&mut self) {
        if self.state == TaskState::Paused {
            self.state = TaskState::Running;
            self.last_tick = None;
        }
    }

    /// Any state `→ Cancelled`; terminal, idempotent. The registry drops
    /// the task on the next scheduling pass.
    pub fn cancel(&mut self) {
        self.state = TaskState::Cancelled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroller::ScrollDirection;
    use drift_core::Polygon;

    fn scroll_task() -> MotionTask {
        MotionTask::new(MotionConfig::Scroll(ScrollConfig::new(
            480.0,
            24000.0,
            ScrollDirection::Up,
        )))
    }

    #[test]
    fn test_first_tick_contributes_zero() {
        let mut task = scroll_task();

        // However late the first tick arrives, no active time has passed yet
        task.tick(5000.0);

        assert_eq!(task.elapsed_ms(), 0.0);
        assert_eq!(*task.shared_output().lock().unwrap(), MotionOutput::Offset(0.0));
    }

    #[test]
    fn test_elapsed_accumulates_across_ticks() {
        let mut task = scroll_task();

        task.tick(1000.0);
        task.tick(7000.0);
        task.tick(13000.0);

        assert_eq!(task.elapsed_ms(), 12000.0);
        assert_eq!(
            *task.shared_output().lock().unwrap(),
            MotionOutput::Offset(-240.0)
        );
    }

    #[test]
    fn test_pause_freezes_output_bit_for_bit() {
        let mut task = scroll_task();
        task.tick(0.0);
        task.tick(3000.0);

        let frozen = *task.shared_output().lock().unwrap();
        task.pause();

        // Ticks at arbitrary later wall times leave the output untouched
        task.tick(10_000.0);
        task.tick(500_000.0);

        assert_eq!(*task.shared_output().lock().unwrap(), frozen);
        assert_eq!(task.elapsed_ms(), 3000.0);
    }

    #[test]
    fn test_resume_continues_without_jump() {
        let mut task = scroll_task();
        task.tick(0.0);
        task.tick(3000.0);

        let before_pause = *task.shared_output().lock().unwrap();
        task.pause();
        task.resume();

        // A long paused gap: the first running tick contributes zero delta
        task.tick(90_000.0);
        assert_eq!(*task.shared_output().lock().unwrap(), before_pause);

        // Active time then accumulates from where it left off
        task.tick(91_000.0);
        assert_eq!(task.elapsed_ms(), 4000.0);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut task = scroll_task();
        task.pause();
        task.pause();

        assert_eq!(task.state(), TaskState::Paused);
    }

    #[test]
    fn test_cancel_is_terminal() {
        let mut task = scroll_task();
        task.cancel();

        // No transition leaves Cancelled
        task.pause();
        task.resume();
        task.tick(1000.0);

        assert_eq!(task.state(), TaskState::Cancelled);
        assert_eq!(task.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_follower_task_outputs_positions() {
        let path = std::sync::Arc::new(Polygon::rectangle(100.0, 100.0));
        let mut task = MotionTask::new(MotionConfig::Arc(ArcConfig::new(path, 2000.0)));

        task.tick(0.0);
        task.tick(1000.0);

        let output = *task.shared_output().lock().unwrap();
        let position = output.as_position().unwrap();

        assert!(position.approx_eq(&Point::new(100.0, 100.0), 1e-4));
        assert!(output.as_offset().is_none());
    }
}
