pub mod constants;
mod frame;
mod items;
pub mod layout;
mod options;
mod projection;
mod region;
mod types;
mod units;

pub use frame::*;
pub use items::*;
pub use layout::{
    Fit, auto_adjust, axis_direction, bbox_after_rotation, frame_scale, map_to_paper,
    paper_to_map, region_from_fixed_scale,
};
pub use options::*;
pub use projection::ProjectionInfo;
pub use region::{Region, RegionQuery, RegionRequest};
pub use types::*;
pub use units::{Unit, UnitConversion, UnitFamily, parse_number};
