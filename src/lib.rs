#![doc = include_str!("../README.md")]

mod binary;
#[cfg(feature = "geo")]
mod convert;
mod error;
mod model;

pub use binary::{
    degrees_to_fixed, deserialize_base64_openlr, deserialize_binary_openlr, fixed_to_degrees,
    reference_round, serialize_base64_openlr, serialize_binary_openlr,
};
pub use error::{DeserializeError, SerializeError};
pub use model::{
    Bearing, Circle, ClosedLine, Coordinate, Fow, Frc, Grid, GridSize, Length, Line,
    LineAttributes, LocationReference, LocationType, Offset, Offsets, Orientation, PathAttributes,
    Poi, Point, PointAlongLine, Polygon, Rectangle, SideOfRoad,
};
