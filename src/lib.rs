pub mod coord;
pub mod error;
pub mod metric;
pub mod scalar;
pub mod segment;
pub mod vector;

pub use coord::{coord2, coord3, coord4, Coord};
pub use error::{CartesError, Result};
pub use metric::{distance, square_distance};
pub use scalar::{abs, sqrt, sqrt_with_threshold};
pub use segment::Segment;
pub use vector::{dot, Vector};
