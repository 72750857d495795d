use std::io::{Cursor, Write};

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use tracing::{debug, trace};

use crate::binary::encoding::EncodedAttributes;
use crate::{
    Circle, ClosedLine, Coordinate, Grid, Line, LineAttributes, LocationReference, Offsets, Poi,
    Point, PointAlongLine, Polygon, Rectangle, SerializeError,
};

/// Encodes a location reference into its Base64 text form.
pub fn serialize_base64_openlr(location: &LocationReference) -> Result<String, SerializeError> {
    serialize_binary_openlr(location).map(|data| BASE64_STANDARD.encode(data))
}

/// Encodes a location reference into the version 3 binary physical format.
pub fn serialize_binary_openlr(location: &LocationReference) -> Result<Vec<u8>, SerializeError> {
    let location_type = location.location_type();
    let mut writer = OpenLrBinaryWriter::default();
    writer.write_bytes(&[OpenLrBinaryWriter::VERSION | location_type.header_code() << 3])?;

    match location {
        LocationReference::Line(line) => writer.write_line(line)?,
        LocationReference::GeoCoordinate(coordinate) => writer.write_coordinate(*coordinate)?,
        LocationReference::PointAlongLine(point) => writer.write_point_along_line(point)?,
        LocationReference::Poi(poi) => writer.write_poi(poi)?,
        LocationReference::Circle(circle) => writer.write_circle(circle)?,
        LocationReference::Rectangle(rectangle) => writer.write_rectangle(rectangle)?,
        LocationReference::Grid(grid) => writer.write_grid(grid)?,
        LocationReference::Polygon(polygon) => writer.write_polygon(polygon)?,
        LocationReference::ClosedLine(line) => writer.write_closed_line(line)?,
    }

    let data = writer.cursor.into_inner();
    debug!("Serialized {location_type} into {} bytes", data.len());
    Ok(data)
}

#[derive(Debug, Default)]
struct OpenLrBinaryWriter {
    cursor: Cursor<Vec<u8>>,
}

impl OpenLrBinaryWriter {
    const VERSION: u8 = 3;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SerializeError> {
        self.cursor.write_all(bytes)?;
        Ok(())
    }

    fn write_line(&mut self, line: &Line) -> Result<(), SerializeError> {
        let Some((last_point, [first_point, points @ ..])) = line.points.split_last() else {
            return Err(SerializeError::InvalidLine);
        };

        let previous = self.write_chain(first_point, points)?;
        self.write_terminal_point(last_point, previous, 0, &line.offsets)
    }

    fn write_closed_line(&mut self, line: &ClosedLine) -> Result<(), SerializeError> {
        let [first_point, points @ ..] = line.points.as_slice() else {
            return Err(SerializeError::InvalidClosedLine);
        };

        self.write_chain(first_point, points)?;
        self.write_attributes(line.last_line, 0, 0)
    }

    fn write_point_along_line(&mut self, point: &PointAlongLine) -> Result<(), SerializeError> {
        let [first_point, last_point] = &point.points;

        self.write_coordinate(first_point.coordinate)?;
        self.write_path_point(first_point, point.orientation as u8)?;

        let offsets = Offsets::positive(point.offset);
        let side = point.side as u8;
        self.write_terminal_point(last_point, first_point.coordinate, side, &offsets)
    }

    fn write_poi(&mut self, poi: &Poi) -> Result<(), SerializeError> {
        self.write_point_along_line(&poi.point)?;
        // relative to the first LRP of the access point
        self.write_relative_coordinate(poi.poi, poi.point.points[0].coordinate)
    }

    fn write_circle(&mut self, circle: &Circle) -> Result<(), SerializeError> {
        self.write_coordinate(circle.center)?;
        self.write_bytes(&circle.radius.try_into_radius_be_bytes()?)
    }

    /// The upper right corner is written relative to the lower left one when both deltas fit,
    /// otherwise in absolute degrees.
    fn write_rectangle(&mut self, rectangle: &Rectangle) -> Result<(), SerializeError> {
        let Rectangle {
            lower_left,
            upper_right,
        } = *rectangle;
        self.write_coordinate(lower_left)?;

        if let Ok(deltas) = upper_right.try_into_relative_be_bytes(lower_left) {
            return self.write_bytes(&deltas);
        }

        trace!("Upper right corner {upper_right:?} is too far for relative degrees");
        self.write_coordinate(upper_right)
    }

    fn write_grid(&mut self, grid: &Grid) -> Result<(), SerializeError> {
        self.write_rectangle(&grid.rect)?;
        self.write_bytes(&grid.size.into_be_bytes())
    }

    fn write_polygon(&mut self, polygon: &Polygon) -> Result<(), SerializeError> {
        let (first_corner, corners) = match polygon.corners.as_slice() {
            [first, rest @ ..] if rest.len() >= 2 => (*first, rest),
            _ => return Err(SerializeError::InvalidPolygon),
        };

        self.write_coordinate(first_corner)?;
        corners.iter().try_fold(first_corner, |previous, &corner| {
            self.write_relative_coordinate(corner, previous).map(|()| corner)
        })?;

        Ok(())
    }

    /// Writes LRPs that have path attributes, the first one in absolute degrees and the
    /// others relative to the LRP before them. Returns the coordinate of the last LRP.
    fn write_chain(
        &mut self,
        first_point: &Point,
        points: &[Point],
    ) -> Result<Coordinate, SerializeError> {
        self.write_coordinate(first_point.coordinate)?;
        self.write_path_point(first_point, 0)?;

        points.iter().try_fold(first_point.coordinate, |previous, point| {
            self.write_relative_coordinate(point.coordinate, previous)?;
            self.write_path_point(point, 0)?;
            Ok(point.coordinate)
        })
    }

    /// Writes what follows the coordinate of a LRP that has path attributes.
    fn write_path_point(&mut self, point: &Point, qualifier: u8) -> Result<(), SerializeError> {
        let path = point.path_attributes();
        self.write_attributes(point.line, qualifier, path.lfrcnp as u8)?;
        self.write_bytes(&[path.dnp.try_into_dnp_byte()?])
    }

    /// Writes the LRP that ends a line or a point along line and the offsets that are present.
    /// Absent offsets are validated too, so a negative or NaN offset is an error.
    fn write_terminal_point(
        &mut self,
        point: &Point,
        previous: Coordinate,
        qualifier: u8,
        offsets: &Offsets,
    ) -> Result<(), SerializeError> {
        let buckets = [offsets.pos, offsets.neg]
            .map(|offset| offset.try_into_byte().map(|bucket| (offset, bucket)));

        self.write_relative_coordinate(point.coordinate, previous)?;
        self.write_attributes(point.line, qualifier, offsets.flags())?;

        for bucket in buckets {
            let (offset, bucket) = bucket?;
            if offset.is_present() {
                self.write_bytes(&[bucket])?;
            }
        }

        Ok(())
    }

    fn write_coordinate(&mut self, coordinate: Coordinate) -> Result<(), SerializeError> {
        self.write_bytes(&coordinate.try_into_be_bytes()?)
    }

    /// Deltas are taken from the given `previous` coordinate, not from what a decoder would
    /// read back for it.
    fn write_relative_coordinate(
        &mut self,
        coordinate: Coordinate,
        previous: Coordinate,
    ) -> Result<(), SerializeError> {
        self.write_bytes(&coordinate.try_into_relative_be_bytes(previous)?)
    }

    fn write_attributes(
        &mut self,
        line: LineAttributes,
        qualifier: u8,
        path: u8,
    ) -> Result<(), SerializeError> {
        let attributes = EncodedAttributes {
            line,
            qualifier,
            path,
        };
        self.write_bytes(&attributes.try_into_be_bytes()?)
    }
}
