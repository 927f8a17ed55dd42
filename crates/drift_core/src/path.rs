//! Arc-length-parameterized closed paths
//!
//! A closed path maps a distance travelled along its outline to a 2-D point.
//! Parameterizing by arc length keeps position independent of time, which is
//! what lets the motion engine sweep an outline at constant speed.
//!
//! Distances outside `[0, total_length)` wrap, so
//! `point_at_length(total_length)` is exactly `point_at_length(0.0)`, the
//! closure invariant every implementation must uphold.

use std::sync::Arc;

use crate::geometry::Point;

/// A closed curve parameterized by distance along its outline
pub trait ClosedPath {
    /// Total outline length
    fn total_length(&self) -> f32;

    /// Point at distance `s` along the outline, measured from the path's
    /// start point. `s` wraps modulo `total_length()`.
    fn point_at_length(&self, s: f32) -> Point;
}

/// Shared, thread-safe path reference as stored in motion configs
pub type SharedPath = Arc<dyn ClosedPath + Send + Sync>;

/// Wrap a distance into `[0, total)`, tolerating negative input
fn wrap_length(s: f32, total: f32) -> f32 {
    if total <= 0.0 {
        return 0.0;
    }
    let wrapped = s.rem_euclid(total);
    // rem_euclid can return `total` itself when s is a tiny negative value
    if wrapped >= total {
        0.0
    } else {
        wrapped
    }
}

// ============================================================================
// Polygon
// ============================================================================

/// A closed polyline: straight segments from vertex to vertex, with an
/// implicit closing segment from the last vertex back to the first.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point>,
    /// Per-segment lengths, `lengths[i]` from vertex i to vertex i+1 (wrapping)
    lengths: Vec<f32>,
    total: f32,
}

impl Polygon {
    /// Create a closed polygon from its vertices
    pub fn new(vertices: Vec<Point>) -> Self {
        let n = vertices.len();
        let mut lengths = Vec::with_capacity(n);
        let mut total = 0.0;

        for i in 0..n {
            let len = vertices[i].distance(&vertices[(i + 1) % n]);
            lengths.push(len);
            total += len;
        }

        Self {
            vertices,
            lengths,
            total,
        }
    }

    /// An axis-aligned rectangle outline with its top-left corner at the
    /// origin, traversed clockwise in screen coordinates (y grows downward)
    pub fn rectangle(width: f32, height: f32) -> Self {
        Self::new(vec![
            Point::new(0.0, 0.0),
            Point::new(width, 0.0),
            Point::new(width, height),
            Point::new(0.0, height),
        ])
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl ClosedPath for Polygon {
    fn total_length(&self) -> f32 {
        self.total
    }

    fn point_at_length(&self, s: f32) -> Point {
        if self.vertices.is_empty() {
            return Point::ZERO;
        }

        let mut remaining = wrap_length(s, self.total);
        let n = self.vertices.len();

        for i in 0..n {
            let len = self.lengths[i];
            if remaining < len {
                let t = remaining / len;
                return self.vertices[i].lerp(&self.vertices[(i + 1) % n], t);
            }
            remaining -= len;
        }

        // Accumulated float error can leave a sliver past the last segment
        self.vertices[0]
    }
}

// ============================================================================
// RoundedRect
// ============================================================================

/// One piece of a rounded rectangle outline
#[derive(Clone, Copy, Debug)]
enum RectSegment {
    /// Straight edge from `from` to `to`
    Edge { from: Point, to: Point },
    /// Quarter arc around `center`, starting at angle `start` (radians),
    /// sweeping clockwise in screen coordinates
    Corner { center: Point, start: f32 },
}

/// An axis-aligned rectangle with circular corners, top-left at the origin,
/// traversed clockwise in screen coordinates starting on the top edge.
///
/// This is the outline a border highlight travels: the rectangle behind a
/// rounded button or card. A radius of zero degenerates to a plain
/// rectangle; radii larger than half the smaller side are clamped.
#[derive(Clone, Debug)]
pub struct RoundedRect {
    width: f32,
    height: f32,
    radius: f32,
    /// Segment list with per-segment lengths, precomputed at construction
    segments: Vec<(RectSegment, f32)>,
    total: f32,
}

impl RoundedRect {
    /// Create a rounded rectangle outline
    pub fn new(width: f32, height: f32, radius: f32) -> Self {
        let max_radius = (width.min(height) / 2.0).max(0.0);
        let radius = if radius > max_radius {
            tracing::warn!(
                radius,
                max_radius,
                "corner radius exceeds half the smaller side, clamping"
            );
            max_radius
        } else {
            radius.max(0.0)
        };

        let (w, h, r) = (width, height, radius);
        let arc_len = std::f32::consts::FRAC_PI_2 * r;
        let half_pi = std::f32::consts::FRAC_PI_2;
        let pi = std::f32::consts::PI;

        let segments = vec![
            // Top edge, left to right
            (
                RectSegment::Edge {
                    from: Point::new(r, 0.0),
                    to: Point::new(w - r, 0.0),
                },
                w - 2.0 * r,
            ),
            // Top-right corner
            (
                RectSegment::Corner {
                    center: Point::new(w - r, r),
                    start: -half_pi,
                },
                arc_len,
            ),
            // Right edge, top to bottom
            (
                RectSegment::Edge {
                    from: Point::new(w, r),
                    to: Point::new(w, h - r),
                },
                h - 2.0 * r,
            ),
            // Bottom-right corner
            (
                RectSegment::Corner {
                    center: Point::new(w - r, h - r),
                    start: 0.0,
                },
                arc_len,
            ),
            // Bottom edge, right to left
            (
                RectSegment::Edge {
                    from: Point::new(w - r, h),
                    to: Point::new(r, h),
                },
                w - 2.0 * r,
            ),
            // Bottom-left corner
            (
                RectSegment::Corner {
                    center: Point::new(r, h - r),
                    start: half_pi,
                },
                arc_len,
            ),
            // Left edge, bottom to top
            (
                RectSegment::Edge {
                    from: Point::new(0.0, h - r),
                    to: Point::new(0.0, r),
                },
                h - 2.0 * r,
            ),
            // Top-left corner
            (
                RectSegment::Corner {
                    center: Point::new(r, r),
                    start: pi,
                },
                arc_len,
            ),
        ];

        let total = segments.iter().map(|(_, len)| len).sum();

        Self {
            width,
            height,
            radius,
            segments,
            total,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Corner radius after clamping
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl ClosedPath for RoundedRect {
    fn total_length(&self) -> f32 {
        self.total
    }

    fn point_at_length(&self, s: f32) -> Point {
        let mut remaining = wrap_length(s, self.total);

        for (segment, len) in &self.segments {
            if remaining < *len {
                return match segment {
                    RectSegment::Edge { from, to } => from.lerp(to, remaining / len),
                    RectSegment::Corner { center, start } => {
                        let angle = start + remaining / self.radius;
                        Point::new(
                            center.x + self.radius * angle.cos(),
                            center.y + self.radius * angle.sin(),
                        )
                    }
                };
            }
            remaining -= len;
        }

        // Wrapped around: back to the start of the top edge
        Point::new(self.radius, 0.0)
    }
}
