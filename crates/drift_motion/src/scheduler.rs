//! Motion scheduler
//!
//! Owns the task registry and advances every task once per rendered frame.
//! The host drives it: construct a [`MotionScheduler`], spawn tasks, and
//! call [`MotionScheduler::tick`] with a timestamp from a [`FrameClock`]
//! (or any monotonic source) in the render loop. The scheduler owns no
//! frame-scheduling primitive of its own.
//!
//! Within one pass every running task observes the identical timestamp, so
//! tasks with the same period that were spawned in the same frame stay
//! phase-consistent with each other.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

use drift_core::{Point, SharedPath};
use slotmap::{new_key_type, SlotMap};

use crate::error::Result;
use crate::follower::ArcConfig;
use crate::scroller::{ScrollConfig, ScrollDirection};
use crate::task::{MotionConfig, MotionOutput, MotionTask, SharedOutput, TaskState};

new_key_type! {
    /// Handle to a registered motion task
    pub struct TaskId;
}

/// Monotonic frame timestamp source
///
/// Milliseconds since construction, backed by `Instant`. One clock per
/// render loop; tasks never read it directly. The host samples it once
/// per frame and passes the timestamp to `tick` so all tasks agree on
/// "now".
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    started: Instant,
}

impl FrameClock {
    /// Start the clock
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock started
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::start()
    }
}

/// Internal state of the motion scheduler
struct SchedulerInner {
    tasks: SlotMap<TaskId, MotionTask>,
}

/// The scheduler that ticks all registered motion tasks
///
/// Cloning shares the same registry. Scheduling is single-threaded and
/// cooperative: exactly one logical thread calls `tick`. The mutex exists
/// so handles can be held (and read) anywhere the host likes.
#[derive(Clone)]
pub struct MotionScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl MotionScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                tasks: SlotMap::with_key(),
            })),
        }
    }

    /// Get a weak handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Register a validated motion task
    ///
    /// Fails with [`crate::ConfigError`] on invalid parameters; no partial
    /// task is registered on failure.
    pub fn spawn(&self, config: impl Into<MotionConfig>) -> Result<TaskHandle> {
        let config = config.into();
        config.validate()?;

        let task = MotionTask::new(config);
        let output = task.shared_output();
        let id = self.inner.lock().unwrap().tasks.insert(task);

        Ok(TaskHandle {
            inner: Arc::downgrade(&self.inner),
            id,
            output,
        })
    }

    /// Spawn a coordinate sweeping `path` once per `period_ms`
    pub fn follower(&self, path: SharedPath, period_ms: f32) -> Result<FollowerHandle> {
        let task = self.spawn(ArcConfig::new(path, period_ms))?;
        Ok(FollowerHandle { task })
    }

    /// Spawn a looped offset covering `extent` once per `period_ms`
    pub fn scroller(
        &self,
        extent: f32,
        period_ms: f32,
        direction: ScrollDirection,
    ) -> Result<ScrollerHandle> {
        let task = self.spawn(ScrollConfig::new(extent, period_ms, direction))?;
        Ok(ScrollerHandle { task })
    }

    /// Advance all tasks to `now_ms`
    ///
    /// Tasks cancelled since the previous pass are swept out first, so a
    /// cancelled task is guaranteed to receive no further ticks from the
    /// pass after its cancellation onward. Returns true if any task is
    /// still running (needs another frame).
    ///
    /// A panic escaping one task's sampling is caught, logged, and
    /// converted into an automatic cancel; one broken animation never
    /// halts the others.
    pub fn tick(&self, now_ms: f64) -> bool {
        let mut inner = self.inner.lock().unwrap();

        inner
            .tasks
            .retain(|_, task| task.state() != TaskState::Cancelled);

        let mut any_running = false;
        for (id, task) in inner.tasks.iter_mut() {
            if catch_unwind(AssertUnwindSafe(|| task.tick(now_ms))).is_err() {
                tracing::error!(task = ?id, "motion task panicked during tick, cancelling");
                task.cancel();
                continue;
            }
            any_running |= task.is_running();
        }

        any_running
    }

    /// Number of registered tasks (including paused and not-yet-swept ones)
    pub fn task_count(&self) -> usize {
        self.inner.lock().unwrap().tasks.len()
    }

    /// Check if any task is still running
    pub fn has_running_tasks(&self) -> bool {
        self.inner
            .lock()
            .unwrap()
            .tasks
            .iter()
            .any(|(_, task)| task.is_running())
    }
}

impl Default for MotionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the motion scheduler
///
/// Passed to components that need to spawn tasks without keeping the
/// scheduler alive.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Recover the scheduler, if it is still alive
    pub fn upgrade(&self) -> Option<MotionScheduler> {
        self.inner.upgrade().map(|inner| MotionScheduler { inner })
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Task handles
// ============================================================================

/// Host-side handle to one motion task
///
/// The handle is the only way a host touches a task; tasks never see each
/// other. Reads never block on scheduling work: the output cell is shared
/// with the task, and it survives cancellation (and scheduler teardown)
/// frozen at its last computed value.
#[derive(Clone)]
pub struct TaskHandle {
    inner: Weak<Mutex<SchedulerInner>>,
    id: TaskId,
    output: SharedOutput,
}

impl TaskHandle {
    /// The task's registry id
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Current output, cached from the task's most recent running tick
    pub fn output(&self) -> MotionOutput {
        *self.output.lock().unwrap()
    }

    /// Current lifecycle state; a task that is gone (swept after cancel,
    /// or outliving its scheduler) reads as Cancelled
    pub fn state(&self) -> TaskState {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().tasks.get(self.id).map(|t| t.state()))
            .unwrap_or(TaskState::Cancelled)
    }

    /// Freeze the task at its current output. Idempotent. Typically bound
    /// to a hover-enter signal by the host's event layer.
    pub fn pause(&self) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(task) = inner.lock().unwrap().tasks.get_mut(self.id) {
                task.pause();
            }
        }
    }

    /// Continue from the frozen output with no catch-up jump. Typically
    /// bound to a hover-leave signal.
    pub fn resume(&self) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(task) = inner.lock().unwrap().tasks.get_mut(self.id) {
                task.resume();
            }
        }
    }

    /// Cancel the task. It receives no ticks from the next scheduling pass
    /// onward; its last output stays readable.
    pub fn cancel(&self) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(task) = inner.lock().unwrap().tasks.get_mut(self.id) {
                task.cancel();
            }
        }
    }
}

/// Typed handle to an arc-length follower
#[derive(Clone)]
pub struct FollowerHandle {
    task: TaskHandle,
}

impl FollowerHandle {
    /// Current coordinate on the path
    pub fn position(&self) -> Point {
        self.task.output().as_position().unwrap_or(Point::ZERO)
    }

    pub fn pause(&self) {
        self.task.pause();
    }

    pub fn resume(&self) {
        self.task.resume();
    }

    pub fn cancel(&self) {
        self.task.cancel();
    }

    pub fn state(&self) -> TaskState {
        self.task.state()
    }

    /// The untyped handle
    pub fn as_task(&self) -> &TaskHandle {
        &self.task
    }
}

/// Typed handle to a looped scroller
#[derive(Clone)]
pub struct ScrollerHandle {
    task: TaskHandle,
}

impl ScrollerHandle {
    /// Current scroll offset (negative when scrolling up)
    pub fn offset(&self) -> f32 {
        self.task.output().as_offset().unwrap_or(0.0)
    }

    pub fn pause(&self) {
        self.task.pause();
    }

    pub fn resume(&self) {
        self.task.resume();
    }

    pub fn cancel(&self) {
        self.task.cancel();
    }

    pub fn state(&self) -> TaskState {
        self.task.state()
    }

    /// The untyped handle
    pub fn as_task(&self) -> &TaskHandle {
        &self.task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::Polygon;
    use std::sync::Arc;

    fn square() -> SharedPath {
        Arc::new(Polygon::rectangle(100.0, 100.0))
    }

    #[test]
    fn test_spawn_and_tick() {
        let scheduler = MotionScheduler::new();
        let follower = scheduler.follower(square(), 2000.0).unwrap();

        assert!(scheduler.tick(0.0));
        assert!(scheduler.tick(1000.0));

        assert!(follower
            .position()
            .approx_eq(&Point::new(100.0, 100.0), 1e-4));
    }

    #[test]
    fn test_invalid_config_registers_nothing() {
        let scheduler = MotionScheduler::new();

        assert!(scheduler.follower(square(), 0.0).is_err());
        assert!(scheduler.scroller(0.0, 24000.0, ScrollDirection::Up).is_err());
        assert_eq!(scheduler.task_count(), 0);
    }

    #[test]
    fn test_same_frame_tasks_are_phase_consistent() {
        let scheduler = MotionScheduler::new();
        let a = scheduler.follower(square(), 2000.0).unwrap();
        let b = scheduler.follower(square(), 2000.0).unwrap();

        for now in [0.0, 16.0, 317.0, 1003.0] {
            scheduler.tick(now);
            assert_eq!(a.position(), b.position());
        }
    }

    #[test]
    fn test_cancelled_task_swept_on_next_pass() {
        let scheduler = MotionScheduler::new();
        let scroller = scheduler
            .scroller(480.0, 24000.0, ScrollDirection::Up)
            .unwrap();

        scheduler.tick(0.0);
        scroller.cancel();

        // Still registered until the next pass sweeps it
        assert_eq!(scheduler.task_count(), 1);
        assert_eq!(scroller.state(), TaskState::Cancelled);

        scheduler.tick(16.0);
        assert_eq!(scheduler.task_count(), 0);
        assert_eq!(scroller.state(), TaskState::Cancelled);
    }

    #[test]
    fn test_output_survives_cancellation_frozen() {
        let scheduler = MotionScheduler::new();
        let scroller = scheduler
            .scroller(480.0, 24000.0, ScrollDirection::Up)
            .unwrap();

        scheduler.tick(0.0);
        scheduler.tick(12000.0);
        assert_eq!(scroller.offset(), -240.0);

        scroller.cancel();
        scheduler.tick(13000.0);
        scheduler.tick(20000.0);

        assert_eq!(scroller.offset(), -240.0);
    }

    #[test]
    fn test_output_survives_scheduler_drop() {
        let scroller = {
            let scheduler = MotionScheduler::new();
            let scroller = scheduler
                .scroller(480.0, 24000.0, ScrollDirection::Down)
                .unwrap();
            scheduler.tick(0.0);
            scheduler.tick(12000.0);
            scroller
        };

        assert_eq!(scroller.offset(), 240.0);
        assert_eq!(scroller.state(), TaskState::Cancelled);
    }

    #[test]
    fn test_tick_reports_running_work() {
        let scheduler = MotionScheduler::new();
        assert!(!scheduler.tick(0.0));

        let scroller = scheduler
            .scroller(480.0, 24000.0, ScrollDirection::Up)
            .unwrap();
        assert!(scheduler.tick(16.0));

        scroller.pause();
        assert!(!scheduler.tick(32.0));
        assert!(!scheduler.has_running_tasks());

        scroller.resume();
        assert!(scheduler.tick(48.0));
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = MotionScheduler::new();
            scheduler.handle()
        };

        assert!(!handle.is_alive());
        assert!(handle.upgrade().is_none());
    }

    #[test]
    fn test_frame_clock_is_monotonic() {
        let clock = FrameClock::start();
        let a = clock.now_ms();
        let b = clock.now_ms();

        assert!(b >= a);
        assert!(a >= 0.0);
    }
}
