//!
//! Geometry and collision primitives for nesting flat 2D outlines onto a rectangular sheet.
//!
//! The crate provides the building blocks that an optimizer (such as `ffd`) needs:
//! * [`geometry`]: points, outlines, bounding boxes and rigid transformations
//! * [`collision_detection`]: the [`OverlapTest`](collision_detection::OverlapTest) capability
//! * [`entities`]: items, the sheet, placed outlines and the layout holding them
//! * [`io`]: DXF import/export and SVG rendering of layouts
//!

/// Everything related to the overlap tests between outlines
pub mod collision_detection;

/// Entities to model nesting problems
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing drawings into and exporting layouts out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
