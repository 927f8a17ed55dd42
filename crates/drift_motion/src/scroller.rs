//! Looped scroller configuration and sampling
//!
//! A scroller produces a 1-D offset for content rendered as two
//! back-to-back copies of the same item sequence. Because offset `E`
//! (one full copy) shows exactly the pixels offset `0` does, wrapping the
//! offset modulo `E` restarts the loop without any visible jump.

use smallvec::SmallVec;

use crate::error::{ConfigError, Result};

/// Scroll direction along the vertical axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moves toward negative offsets (upward in screen coordinates)
    #[default]
    Up,
    /// Content moves toward positive offsets
    Down,
}

/// Configuration for a looped scroller
#[derive(Clone, Copy, Debug)]
pub struct ScrollConfig {
    /// Total size of one copy of the item sequence along the scroll axis
    pub extent: f32,
    /// Time to scroll through one full extent, in milliseconds
    pub period_ms: f32,
    /// Scroll direction
    pub direction: ScrollDirection,
}

impl ScrollConfig {
    /// Create a scroller config
    pub fn new(extent: f32, period_ms: f32, direction: ScrollDirection) -> Self {
        Self {
            extent,
            period_ms,
            direction,
        }
    }

    /// Validate construction parameters; never called during ticking
    pub fn validate(&self) -> Result<()> {
        if self.period_ms <= 0.0 {
            return Err(ConfigError::NonPositivePeriod(self.period_ms));
        }
        if self.extent <= 0.0 {
            return Err(ConfigError::DegenerateExtent(self.extent));
        }
        Ok(())
    }

    /// Offset after `elapsed_ms` of active time
    ///
    /// The magnitude wraps modulo the extent; the sign encodes direction.
    pub fn sample(&self, elapsed_ms: f64) -> f32 {
        let extent = self.extent as f64;
        let magnitude = (elapsed_ms / self.period_ms as f64 * extent).rem_euclid(extent);

        match self.direction {
            ScrollDirection::Up => -magnitude as f32,
            ScrollDirection::Down => magnitude as f32,
        }
    }
}

// ============================================================================
// ScrollSet
// ============================================================================

/// An ordered item sequence with known per-item extents
///
/// This is the model of what the host renders twice back-to-back: the sum
/// of the item extents is the scroller's `E`, and [`ScrollSet::item_at`]
/// tells a host which item of one copy sits at a given wrapped distance.
#[derive(Clone, Debug, Default)]
pub struct ScrollSet {
    extents: SmallVec<[f32; 8]>,
    total: f32,
}

impl ScrollSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from per-item extents
    pub fn from_extents(extents: impl IntoIterator<Item = f32>) -> Self {
        let mut set = Self::new();
        for extent in extents {
            set.push(extent);
        }
        set
    }

    /// Append an item of the given extent
    pub fn push(&mut self, extent: f32) {
        self.extents.push(extent);
        self.total += extent;
    }

    /// Number of items in one copy of the sequence
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Total extent of one copy of the sequence
    pub fn total_extent(&self) -> f32 {
        self.total
    }

    /// Wrap a signed offset into `[0, total_extent)`
    ///
    /// Offsets exactly one extent apart wrap to the same value, which is
    /// what makes the doubled-list seam invisible.
    pub fn wrap_offset(&self, offset: f32) -> f32 {
        if self.total <= 0.0 {
            return 0.0;
        }
        let wrapped = offset.rem_euclid(self.total);
        if wrapped >= self.total {
            0.0
        } else {
            wrapped
        }
    }

    /// Index of the item covering `distance` into one copy of the sequence
    ///
    /// `distance` wraps first, so any signed offset is acceptable.
    pub fn item_at(&self, distance: f32) -> Option<usize> {
        if self.is_empty() || self.total <= 0.0 {
            return None;
        }

        let mut remaining = self.wrap_offset(distance);
        for (index, extent) in self.extents.iter().enumerate() {
            if remaining < *extent {
                return Some(index);
            }
            remaining -= extent;
        }

        Some(self.extents.len() - 1)
    }
}
