use std::io::{Cursor, Read};

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use tracing::debug;

use crate::binary::encoding::EncodedAttributes;
use crate::{
    Circle, ClosedLine, Coordinate, DeserializeError, Grid, GridSize, Length, Line,
    LocationReference, LocationType, Offset, Offsets, PathAttributes, Poi, Point, PointAlongLine,
    Polygon, Rectangle,
};

/// Deserializes an OpenLR Location Reference encoded in Base64.
pub fn deserialize_base64_openlr(
    data: impl AsRef<[u8]>,
) -> Result<LocationReference, DeserializeError> {
    let binary = BASE64_STANDARD.decode(data)?;
    deserialize_binary_openlr(&binary)
}

/// Deserializes a binary representation of an OpenLR Location Reference.
///
/// Bytes that follow a complete location reference are ignored.
pub fn deserialize_binary_openlr(data: &[u8]) -> Result<LocationReference, DeserializeError> {
    let mut reader = OpenLrBinaryReader::new(data);

    let location_type = reader.read_header()?;
    debug!("Deserializing {location_type} from {} bytes", data.len());

    let location = match location_type {
        LocationType::Circle => LocationReference::Circle(reader.read_circle()?),
        LocationType::Line => LocationReference::Line(reader.read_line()?),
        LocationType::Polygon => LocationReference::Polygon(reader.read_polygon()?),
        LocationType::GeoCoordinate => LocationReference::GeoCoordinate(reader.read_coordinate()?),
        LocationType::PointAlongLine => {
            LocationReference::PointAlongLine(reader.read_point_along_line()?)
        }
        LocationType::PoiWithAccessPoint => LocationReference::Poi(reader.read_poi()?),
        LocationType::Rectangle => LocationReference::Rectangle(reader.read_rectangle(11)?),
        LocationType::Grid => LocationReference::Grid(reader.read_grid()?),
        LocationType::ClosedLine => LocationReference::ClosedLine(reader.read_closed_line()?),
    };

    Ok(location)
}

#[derive(Debug)]
struct OpenLrBinaryReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> OpenLrBinaryReader<'a> {
    const VERSION: u8 = 3;

    const fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    /// Number of repeated blocks of `stride` bytes a reference holds besides its `fixed` bytes.
    /// Sizes that are too short give no block, reading the fixed part fails later on.
    const fn repetitions(&self, fixed: usize, stride: usize) -> usize {
        self.cursor.get_ref().len().saturating_sub(fixed) / stride
    }

    fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], DeserializeError> {
        let mut bytes = [0u8; N];
        self.cursor.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    fn read_header(&mut self) -> Result<LocationType, DeserializeError> {
        let [status] = self.read_bytes::<1>()?;
        let (version, type_code) = (status & 0b111, (status >> 3) & 0b1111);

        if version != Self::VERSION {
            return Err(DeserializeError::VersionNotSupported(version));
        }

        let size = self.cursor.get_ref().len();
        LocationType::from_header(type_code, size)
            .ok_or(DeserializeError::UnknownLocationType(status))
    }

    fn read_line(&mut self) -> Result<Line, DeserializeError> {
        let (mut points, previous) = self.read_chain(self.repetitions(9, 7))?;
        let (last_point, attributes) = self.read_terminal_point(previous)?;
        points.push(last_point);

        let offsets = Offsets {
            pos: self.read_offset_if(attributes.has_pos_offset())?,
            neg: self.read_offset_if(attributes.has_neg_offset())?,
        };

        Ok(Line { points, offsets })
    }

    fn read_closed_line(&mut self) -> Result<ClosedLine, DeserializeError> {
        let (points, _) = self.read_chain(1 + self.repetitions(12, 7))?;
        let last_line = self.read_attributes()?.line;
        Ok(ClosedLine { points, last_line })
    }

    fn read_point_along_line(&mut self) -> Result<PointAlongLine, DeserializeError> {
        let coordinate = self.read_coordinate()?;
        let (first_point, first_attributes) = self.read_path_point(coordinate)?;
        let (last_point, last_attributes) = self.read_terminal_point(coordinate)?;

        Ok(PointAlongLine {
            points: [first_point, last_point],
            offset: self.read_offset_if(last_attributes.has_pos_offset())?,
            orientation: first_attributes.orientation()?,
            side: last_attributes.side()?,
        })
    }

    fn read_poi(&mut self) -> Result<Poi, DeserializeError> {
        let point = self.read_point_along_line()?;
        // the POI is relative to the first LRP, not to the last one
        let poi = self.read_relative_coordinate(point.points[0].coordinate)?;
        Ok(Poi { point, poi })
    }

    fn read_circle(&mut self) -> Result<Circle, DeserializeError> {
        Ok(Circle {
            center: self.read_coordinate()?,
            radius: self.read_radius()?,
        })
    }

    /// The upper right corner is relative to the lower left one unless the reference is
    /// longer than `relative_size` bytes.
    fn read_rectangle(&mut self, relative_size: usize) -> Result<Rectangle, DeserializeError> {
        let lower_left = self.read_coordinate()?;

        let upper_right = if self.cursor.get_ref().len() > relative_size {
            self.read_coordinate()?
        } else {
            self.read_relative_coordinate(lower_left)?
        };

        Ok(Rectangle {
            lower_left,
            upper_right,
        })
    }

    fn read_grid(&mut self) -> Result<Grid, DeserializeError> {
        Ok(Grid {
            rect: self.read_rectangle(15)?,
            size: GridSize::from_be_bytes(self.read_bytes()?),
        })
    }

    fn read_polygon(&mut self) -> Result<Polygon, DeserializeError> {
        let relative_corners = self.repetitions(7, 4);
        let mut corners = Vec::with_capacity(1 + relative_corners);

        let mut corner = self.read_coordinate()?;
        corners.push(corner);

        for _ in 0..relative_corners {
            corner = self.read_relative_coordinate(corner)?;
            corners.push(corner);
        }

        Ok(Polygon { corners })
    }

    /// Reads `count` LRPs that have path attributes, the first one in absolute degrees and
    /// the others relative to the LRP before them. Returns the LRPs and the last coordinate.
    fn read_chain(&mut self, count: usize) -> Result<(Vec<Point>, Coordinate), DeserializeError> {
        let mut points = Vec::with_capacity(count + 1);
        let mut coordinate = self.read_coordinate()?;

        for i in 0..count {
            if i > 0 {
                coordinate = self.read_relative_coordinate(coordinate)?;
            }
            let (point, _) = self.read_path_point(coordinate)?;
            points.push(point);
        }

        Ok((points, coordinate))
    }

    /// Reads what follows the coordinate of a LRP that has path attributes.
    fn read_path_point(
        &mut self,
        coordinate: Coordinate,
    ) -> Result<(Point, EncodedAttributes), DeserializeError> {
        let attributes = self.read_attributes()?;
        let [dnp] = self.read_bytes::<1>()?;

        let path = PathAttributes {
            lfrcnp: attributes.lfrcnp()?,
            dnp: Length::from_dnp_byte(dnp),
        };

        let point = Point {
            coordinate,
            line: attributes.line,
            path: Some(path),
        };

        Ok((point, attributes))
    }

    /// Reads the LRP that ends a line or a point along line. Its attributes carry the
    /// offset flags instead of a LFRCNP and are returned as well.
    fn read_terminal_point(
        &mut self,
        previous: Coordinate,
    ) -> Result<(Point, EncodedAttributes), DeserializeError> {
        let coordinate = self.read_relative_coordinate(previous)?;
        let attributes = self.read_attributes()?;

        let point = Point {
            coordinate,
            line: attributes.line,
            path: None,
        };

        Ok((point, attributes))
    }

    /// Offsets are only stored when flagged, a missing offset is 0.
    fn read_offset_if(&mut self, flag: bool) -> Result<Offset, DeserializeError> {
        if !flag {
            return Ok(Offset::default());
        }

        let [bucket] = self.read_bytes::<1>()?;
        Ok(Offset::from_byte(bucket))
    }

    fn read_coordinate(&mut self) -> Result<Coordinate, DeserializeError> {
        self.read_bytes().map(Coordinate::from_be_bytes)
    }

    fn read_relative_coordinate(
        &mut self,
        from: Coordinate,
    ) -> Result<Coordinate, DeserializeError> {
        let deltas = self.read_bytes()?;
        Ok(Coordinate::from_relative_be_bytes(deltas, from))
    }

    fn read_attributes(&mut self) -> Result<EncodedAttributes, DeserializeError> {
        EncodedAttributes::from_be_bytes(self.read_bytes()?)
    }

    /// A radius takes all the remaining bytes.
    fn read_radius(&mut self) -> Result<Length, DeserializeError> {
        let mut radius = Vec::with_capacity(4);
        self.cursor.read_to_end(&mut radius)?;
        Length::from_radius_be_bytes(&radius)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::{Bearing, Fow, Frc, LineAttributes, Offsets, Orientation, SideOfRoad};

    #[test]
    fn openlr_deserialize_version_1_not_supported() {
        assert_eq!(
            deserialize_base64_openlr("CQcm6yX4vTPGFwM7AskzCw==").unwrap_err(),
            DeserializeError::VersionNotSupported(1)
        );
    }

    #[test]
    fn openlr_deserialize_version_2_not_supported() {
        assert_eq!(
            deserialize_base64_openlr("CgRbWyNG9BpsCQCb/jsbtAT/6/+jK1kC").unwrap_err(),
            DeserializeError::VersionNotSupported(2)
        );
    }

    #[test]
    fn openlr_deserialize_unknown_location_type() {
        assert_eq!(
            deserialize_base64_openlr("ewGkNSK5Wg==").unwrap_err(),
            DeserializeError::UnknownLocationType(0b01111011)
        );
    }

    #[test]
    fn openlr_deserialize_invalid_base64() {
        assert_eq!(
            deserialize_base64_openlr("not base64!").unwrap_err(),
            DeserializeError::InvalidBase64
        );
    }

    #[test]
    fn openlr_deserialize_empty_buffer() {
        assert_eq!(
            deserialize_binary_openlr(&[]).unwrap_err(),
            DeserializeError::TruncatedBuffer
        );
    }

    #[test]
    fn openlr_deserialize_truncated_buffer() {
        let data = BASE64_STANDARD.decode("CwRbWyNG9RpsCQCb/jsbtAT/6/+jK1lE").unwrap();

        // header only, a line missing its first LRP
        assert_eq!(
            deserialize_binary_openlr(&data[..1]).unwrap_err(),
            DeserializeError::TruncatedBuffer
        );

        // offset flag set but the offset byte is missing
        assert_eq!(
            deserialize_binary_openlr(&data[..data.len() - 1]).unwrap_err(),
            DeserializeError::TruncatedBuffer
        );

        // circle without radius
        let data = BASE64_STANDARD.decode("AwOgxCUNmwEs").unwrap();
        assert_eq!(
            deserialize_binary_openlr(&data[..7]).unwrap_err(),
            DeserializeError::TruncatedBuffer
        );

        // polygon with a partial first coordinate
        assert_eq!(
            deserialize_binary_openlr(&[0x13, 0x03, 0xa0]).unwrap_err(),
            DeserializeError::TruncatedBuffer
        );
    }

    #[test]
    fn openlr_deserialize_radius_too_large() {
        let mut data = BASE64_STANDARD.decode("AwOgxCUNmwEs").unwrap();
        data.extend([0, 0, 0]);
        assert_eq!(
            deserialize_binary_openlr(&data).unwrap_err(),
            DeserializeError::InvalidRadius(5)
        );
    }

    #[test]
    fn openlr_deserialize_line_location_reference_001() {
        let location = deserialize_base64_openlr("CwRbWyNG9RpsCQCb/jsbtAT/6/+jK1lE").unwrap();

        assert_eq!(
            location,
            LocationReference::Line(Line {
                points: vec![
                    Point {
                        coordinate: Coordinate {
                            lon: 6.1268198,
                            lat: 49.6085178
                        },
                        line: LineAttributes {
                            frc: Frc::Frc3,
                            fow: Fow::MultipleCarriageway,
                            bearing: Bearing::from_degrees(141.0)
                        },
                        path: Some(PathAttributes {
                            lfrcnp: Frc::Frc3,
                            dnp: Length::from_meters(557.0)
                        })
                    },
                    Point {
                        coordinate: Coordinate {
                            lon: 6.1283698,
                            lat: 49.6039878
                        },
                        line: LineAttributes {
                            frc: Frc::Frc3,
                            fow: Fow::SingleCarriageway,
                            bearing: Bearing::from_degrees(231.0)
                        },
                        path: Some(PathAttributes {
                            lfrcnp: Frc::Frc5,
                            dnp: Length::from_meters(264.0)
                        })
                    },
                    Point {
                        coordinate: Coordinate {
                            lon: 6.1281598,
                            lat: 49.6030578
                        },
                        line: LineAttributes {
                            frc: Frc::Frc5,
                            fow: Fow::SingleCarriageway,
                            bearing: Bearing::from_degrees(287.0)
                        },
                        path: None
                    }
                ],
                offsets: Offsets {
                    pos: Offset::from_range(0.267578125),
                    neg: Offset::default()
                }
            })
        );
    }

    #[test]
    fn openlr_deserialize_line_location_reference_002() {
        let location = deserialize_base64_openlr("CwB67CGukRxiCACyAbwaMXU=").unwrap();

        assert_eq!(
            location,
            LocationReference::Line(Line {
                points: vec![
                    Point {
                        coordinate: Coordinate {
                            lon: 0.6752192,
                            lat: 47.3651611
                        },
                        line: LineAttributes {
                            frc: Frc::Frc3,
                            fow: Fow::Roundabout,
                            bearing: Bearing::from_degrees(28.0)
                        },
                        path: Some(PathAttributes {
                            lfrcnp: Frc::Frc3,
                            dnp: Length::from_meters(498.0)
                        })
                    },
                    Point {
                        coordinate: Coordinate {
                            lon: 0.6769992,
                            lat: 47.3696011
                        },
                        line: LineAttributes {
                            frc: Frc::Frc3,
                            fow: Fow::MultipleCarriageway,
                            bearing: Bearing::from_degrees(197.0)
                        },
                        path: None
                    },
                ],
                offsets: Offsets {
                    pos: Offset::default(),
                    neg: Offset::from_range(0.458984375)
                }
            })
        );
    }

    #[test]
    fn openlr_deserialize_line_location_reference_003() {
        let location = deserialize_base64_openlr("CwcX6CItqAs6AQAAAAALGg==").unwrap();

        let coordinate = Coordinate {
            lon: 9.9750602,
            lat: 48.0632865,
        };
        let line = LineAttributes {
            frc: Frc::Frc1,
            fow: Fow::SingleCarriageway,
            bearing: Bearing::from_degrees(298.0),
        };

        assert_eq!(
            location,
            LocationReference::Line(Line {
                points: vec![
                    Point {
                        coordinate,
                        line,
                        path: Some(PathAttributes {
                            lfrcnp: Frc::Frc1,
                            dnp: Length::from_meters(88.0)
                        })
                    },
                    Point {
                        coordinate,
                        line,
                        path: None
                    },
                ],
                offsets: Offsets::default()
            })
        );
    }

    #[test]
    fn openlr_deserialize_coordinate_location_reference_001() {
        let location = deserialize_base64_openlr("I+djotZ9eA==").unwrap();

        assert_eq!(
            location,
            LocationReference::GeoCoordinate(Coordinate {
                lon: -34.6089398,
                lat: -58.3732688
            })
        );
    }

    #[test]
    fn openlr_deserialize_coordinate_location_reference_002() {
        let location = deserialize_base64_openlr("IyVUdwmSoA==").unwrap();

        assert_eq!(
            location,
            LocationReference::GeoCoordinate(Coordinate {
                lon: 52.4952185,
                lat: 13.4616744
            })
        );
    }

    #[test]
    fn openlr_deserialize_point_along_line_location_reference_001() {
        let location = deserialize_base64_openlr("K/6P+SKSuBJGGAUn/1gSUyM=").unwrap();

        assert_eq!(
            location,
            LocationReference::PointAlongLine(PointAlongLine {
                points: [
                    Point {
                        coordinate: Coordinate {
                            lon: -2.0216238,
                            lat: 48.6184394
                        },
                        line: LineAttributes {
                            frc: Frc::Frc2,
                            fow: Fow::MultipleCarriageway,
                            bearing: Bearing::from_degrees(73.0)
                        },
                        path: Some(PathAttributes {
                            lfrcnp: Frc::Frc2,
                            dnp: Length::from_meters(1436.0)
                        })
                    },
                    Point {
                        coordinate: Coordinate {
                            lon: -2.0084338,
                            lat: 48.6167594
                        },
                        line: LineAttributes {
                            frc: Frc::Frc2,
                            fow: Fow::MultipleCarriageway,
                            bearing: Bearing::from_degrees(219.0)
                        },
                        path: None
                    }
                ],
                offset: Offset::from_range(0.138671875),
                orientation: Orientation::Unknown,
                side: SideOfRoad::OnRoadOrUnknown,
            })
        );
    }

    #[test]
    fn openlr_deserialize_point_along_line_location_reference_002() {
        let location = deserialize_base64_openlr("KwBVwSCh+RRXAf/i/9AUXP8=").unwrap();

        let LocationReference::PointAlongLine(point) = location else {
            panic!("Expected a point along line, got {location:?}");
        };

        assert_eq!(point.offset, Offset::from_range(0.998046875));
        assert_eq!(
            point.points[1].coordinate,
            Coordinate {
                lon: 0.4707495,
                lat: 45.8892516
            }
        );
        assert_eq!(point.points[0].line.fow, Fow::Roundabout);
        assert_eq!(point.points[1].line.bearing, Bearing::from_degrees(321.0));
    }

    #[test]
    fn openlr_deserialize_poi_location_reference_001() {
        let location = deserialize_base64_openlr("KwOg5iUNnCOTAv+D/5QjQ1j/gP/r").unwrap();

        assert_eq!(
            location,
            LocationReference::Poi(Poi {
                point: PointAlongLine {
                    points: [
                        Point {
                            coordinate: Coordinate {
                                lon: 5.1025807,
                                lat: 52.1059978
                            },
                            line: LineAttributes {
                                frc: Frc::Frc4,
                                fow: Fow::SingleCarriageway,
                                bearing: Bearing::from_degrees(219.0)
                            },
                            path: Some(PathAttributes {
                                lfrcnp: Frc::Frc4,
                                dnp: Length::from_meters(147.0)
                            })
                        },
                        Point {
                            coordinate: Coordinate {
                                lon: 5.1013307,
                                lat: 52.1049178
                            },
                            line: LineAttributes {
                                frc: Frc::Frc4,
                                fow: Fow::SingleCarriageway,
                                bearing: Bearing::from_degrees(39.0)
                            },
                            path: None
                        }
                    ],
                    offset: Offset::from_range(0.345703125),
                    orientation: Orientation::Unknown,
                    side: SideOfRoad::OnRoadOrUnknown,
                },
                poi: Coordinate {
                    lon: 5.1013007,
                    lat: 52.1057878
                }
            })
        );
    }

    #[test]
    fn openlr_deserialize_circle_location_reference_001() {
        let location = deserialize_base64_openlr("AwOgxCUNmwEs").unwrap();

        assert_eq!(
            location,
            LocationReference::Circle(Circle {
                center: Coordinate {
                    lon: 5.1018512,
                    lat: 52.1059763
                },
                radius: Length::from_meters(300.0)
            })
        );
    }

    #[test]
    fn openlr_deserialize_circle_location_reference_002() {
        let location = deserialize_base64_openlr("A/2lJCfIiAfQ").unwrap();

        assert_eq!(
            location,
            LocationReference::Circle(Circle {
                center: Coordinate {
                    lon: -3.3115947,
                    lat: 55.9452903
                },
                radius: Length::from_meters(2000.0)
            })
        );
    }

    #[test]
    fn openlr_deserialize_rectangle_location_reference_001() {
        let location = deserialize_base64_openlr("Qxl5HRKFDR33oB/agA==").unwrap();

        assert_eq!(
            location,
            LocationReference::Rectangle(Rectangle {
                lower_left: Coordinate {
                    lon: 35.8215343,
                    lat: 26.0433590
                },
                upper_right: Coordinate {
                    lon: 42.1414840,
                    lat: 44.7939956
                }
            })
        );
    }

    #[test]
    fn openlr_deserialize_rectangle_location_reference_002() {
        let location = deserialize_base64_openlr("QwOgcSUNGgGIAX8=").unwrap();

        assert_eq!(
            location,
            LocationReference::Rectangle(Rectangle {
                lower_left: Coordinate {
                    lon: 5.1000702,
                    lat: 52.1032083
                },
                upper_right: Coordinate {
                    lon: 5.1039902,
                    lat: 52.1070383
                }
            })
        );
    }

    #[test]
    fn openlr_deserialize_grid_location_reference_001() {
        let location = deserialize_base64_openlr("Q/xfwiMc5QsGuyx13wILASg=").unwrap();

        assert_eq!(
            location,
            LocationReference::Grid(Grid {
                rect: Rectangle {
                    lower_left: Coordinate {
                        lon: -5.0989758,
                        lat: 49.3774616
                    },
                    upper_right: Coordinate {
                        lon: 15.5057108,
                        lat: 62.5224745
                    }
                },
                size: GridSize {
                    columns: 523,
                    rows: 296
                }
            })
        );
    }

    #[test]
    fn openlr_deserialize_grid_location_reference_002() {
        let location = deserialize_base64_openlr("QwOgNiUM5wFVANsAAwAC").unwrap();

        assert_eq!(
            location,
            LocationReference::Grid(Grid {
                rect: Rectangle {
                    lower_left: Coordinate {
                        lon: 5.0988042,
                        lat: 52.1021139
                    },
                    upper_right: Coordinate {
                        lon: 5.1022142,
                        lat: 52.1043039
                    }
                },
                size: GridSize {
                    columns: 3,
                    rows: 2
                }
            })
        );
    }

    #[test]
    fn openlr_deserialize_polygon_location_reference_001() {
        let location = deserialize_base64_openlr("EwOgUCUNEwJFAH//yAEv/vIAxw==").unwrap();

        assert_eq!(
            location,
            LocationReference::Polygon(Polygon {
                corners: vec![
                    Coordinate {
                        lon: 5.0993621,
                        lat: 52.1030580
                    },
                    Coordinate {
                        lon: 5.1051721,
                        lat: 52.1043280
                    },
                    Coordinate {
                        lon: 5.1046171,
                        lat: 52.1073541
                    },
                    Coordinate {
                        lon: 5.1019192,
                        lat: 52.1093396
                    }
                ]
            })
        );
    }

    #[test]
    fn openlr_deserialize_closed_line_location_reference_001() {
        let location = deserialize_base64_openlr("WwOgrCUNaiOLBiMD").unwrap();

        assert_eq!(
            location,
            LocationReference::ClosedLine(ClosedLine {
                points: vec![Point {
                    coordinate: Coordinate {
                        lon: 5.1013362,
                        lat: 52.1049249
                    },
                    line: LineAttributes {
                        frc: Frc::Frc4,
                        fow: Fow::SingleCarriageway,
                        bearing: Bearing::from_degrees(129.0)
                    },
                    path: Some(PathAttributes {
                        lfrcnp: Frc::Frc4,
                        dnp: Length::from_meters(381.0)
                    })
                }],
                last_line: LineAttributes {
                    frc: Frc::Frc4,
                    fow: Fow::SingleCarriageway,
                    bearing: Bearing::from_degrees(39.0)
                }
            })
        );
    }

    #[test]
    fn openlr_deserialize_closed_line_location_reference_002() {
        let location = deserialize_base64_openlr("WwRboCNGfhJrBAAJ/zkb9AgTFQ==").unwrap();

        assert_eq!(
            location,
            LocationReference::ClosedLine(ClosedLine {
                points: vec![
                    Point {
                        coordinate: Coordinate {
                            lon: 6.1283004,
                            lat: 49.6059644
                        },
                        line: LineAttributes {
                            frc: Frc::Frc2,
                            fow: Fow::MultipleCarriageway,
                            bearing: Bearing::from_degrees(129.0)
                        },
                        path: Some(PathAttributes {
                            lfrcnp: Frc::Frc3,
                            dnp: Length::from_meters(264.0)
                        })
                    },
                    Point {
                        coordinate: Coordinate {
                            lon: 6.1283904,
                            lat: 49.6039744
                        },
                        line: LineAttributes {
                            frc: Frc::Frc3,
                            fow: Fow::SingleCarriageway,
                            bearing: Bearing::from_degrees(231.0)
                        },
                        path: Some(PathAttributes {
                            lfrcnp: Frc::Frc7,
                            dnp: Length::from_meters(498.0)
                        })
                    },
                ],
                last_line: LineAttributes {
                    frc: Frc::Frc2,
                    fow: Fow::SingleCarriageway,
                    bearing: Bearing::from_degrees(242.0)
                }
            })
        );
    }
}
