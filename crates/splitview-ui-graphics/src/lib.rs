//! Pure geometry data for splitview
//!
//! Positions and extents are logical (CSS) pixels.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Size};
}
