//! Conversions between location reference shapes and [geo] geometries.

use crate::{Coordinate, Polygon, Rectangle};

impl From<Coordinate> for geo::Coord {
    fn from(coordinate: Coordinate) -> Self {
        geo::coord! { x: coordinate.lon, y: coordinate.lat }
    }
}

impl From<geo::Coord> for Coordinate {
    fn from(coord: geo::Coord) -> Self {
        Self {
            lon: coord.x,
            lat: coord.y,
        }
    }
}

impl From<Coordinate> for geo::Point {
    fn from(coordinate: Coordinate) -> Self {
        geo::Point::new(coordinate.lon, coordinate.lat)
    }
}

impl From<&Rectangle> for geo::Rect {
    fn from(rectangle: &Rectangle) -> Self {
        geo::Rect::new(rectangle.lower_left, rectangle.upper_right)
    }
}

impl From<&Polygon> for geo::Polygon {
    /// The exterior ring is closed from the corners, there are no interiors.
    fn from(polygon: &Polygon) -> Self {
        let exterior: Vec<geo::Coord> = polygon.corners.iter().copied().map(Into::into).collect();
        geo::Polygon::new(geo::LineString::new(exterior), vec![])
    }
}
