/// Convex hull of a set of points
pub mod convex_hull;

/// Decomposed placement transformation (rotation about a pivot followed by a translation)
mod d_transformation;

/// Set of traits shared by the geometric primitives
pub mod geo_traits;

/// Geometric primitives: points, rectangles and outlines
pub mod primitives;

mod transformation;

#[doc(inline)]
pub use d_transformation::DTransformation;
#[doc(inline)]
pub use transformation::rotate_point;
