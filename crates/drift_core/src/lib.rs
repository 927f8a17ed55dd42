//! Drift Core Primitives
//!
//! This crate provides the foundational types for the Drift motion engine:
//!
//! - **Geometry**: 2-D points with the interpolation helpers motion code needs
//! - **Closed Paths**: arc-length-parameterized closed curves (`ClosedPath`),
//!   with polygon and rounded-rectangle implementations
//!
//! # Example
//!
//! ```rust
//! use drift_core::{ClosedPath, Polygon};
//!
//! // A 100x100 square, perimeter 400
//! let square = Polygon::rectangle(100.0, 100.0);
//!
//! assert_eq!(square.total_length(), 400.0);
//!
//! // Halfway around the outline lands on the opposite corner
//! let p = square.point_at_length(200.0);
//! assert!((p.x - 100.0).abs() < 1e-4);
//! assert!((p.y - 100.0).abs() < 1e-4);
//! ```

pub mod geometry;
pub mod path;

pub use geometry::Point;
pub use path::{ClosedPath, Polygon, RoundedRect, SharedPath};
