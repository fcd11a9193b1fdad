//! Geometry calculations for map frames
//!
//! This module handles all the geometric calculations between the page and
//! the map:
//! - Fitting a frame to a region's aspect ratio (auto-adjust)
//! - Converting points between paper and map coordinates
//! - Deriving a region from a fixed scale and center
//! - Bounding boxes of rotated items

mod coords;
mod fit;
mod fixed_scale;
mod rotation;

pub use coords::*;
pub use fit::*;
pub use fixed_scale::*;
pub use rotation::*;
