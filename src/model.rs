use approx::abs_diff_eq;
use strum::{Display, EnumIter, FromRepr};

/// Importance class of a road, `Frc0` for main roads down to `Frc7` for the least important.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Frc {
    Frc0 = 0,
    Frc1 = 1,
    Frc2 = 2,
    Frc3 = 3,
    Frc4 = 4,
    Frc5 = 5,
    Frc6 = 6,
    #[default]
    Frc7 = 7,
}

/// Physical kind of road.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Fow {
    Undefined = 0,
    /// Separated carriageways, motorized traffic only.
    Motorway = 1,
    /// Separated carriageways that are not a motorway.
    MultipleCarriageway = 2,
    SingleCarriageway = 3,
    /// One way ring road.
    Roundabout = 4,
    /// Open area surrounded by roads that is not a roundabout.
    TrafficSquare = 5,
    /// Ramp to enter or leave another road.
    SlipRoad = 6,
    /// Known road kind that fits none of the above.
    #[default]
    Other = 7,
}

/// Where a point location lies relative to the road it is referenced on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, FromRepr)]
#[repr(u8)]
pub enum SideOfRoad {
    /// On the road itself, or not applicable.
    #[default]
    OnRoadOrUnknown = 0,
    Right = 1,
    Left = 2,
    Both = 3,
}

/// Direction of a point location relative to the direction of its referenced line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Unknown = 0,
    /// From the first towards the second LRP.
    Forward = 1,
    /// From the second towards the first LRP.
    Backward = 2,
    Both = 3,
}

/// Meters. The physical format stores it either as a DNP interval or as a circle radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Length(f64);

impl Length {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn meters(&self) -> f64 {
        self.0
    }
}

/// Clockwise angle from true North in degrees, valid in `[0, 360)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Bearing(f64);

impl Bearing {
    pub const fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    pub const fn degrees(&self) -> f64 {
        self.0
    }
}

/// WGS84 longitude and latitude in degrees.
///
/// Two coordinates are equal when both axes are within [`Coordinate::EPSILON`], so that a
/// coordinate written in absolute degrees compares equal to itself once read back. Relative
/// coordinates may drift further, by up to 0.5e-5 degrees per step of their chain.
#[derive(Clone, Copy, Debug, Default)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Slightly more than half a step of the 24-bit absolute resolution (180 / 2^24 degrees).
    pub const EPSILON: f64 = 1.1e-5;
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        abs_diff_eq!(self.lon, other.lon, epsilon = Self::EPSILON)
            && abs_diff_eq!(self.lat, other.lat, epsilon = Self::EPSILON)
    }
}

/// Attributes of the line that starts (or for the last LRP ends) at a LRP.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineAttributes {
    pub frc: Frc,
    pub fow: Fow,
    pub bearing: Bearing,
}

/// Attributes of the path from a LRP to the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathAttributes {
    /// Lowest FRC along the path to the next LRP.
    pub lfrcnp: Frc,
    /// Distance to the next LRP.
    pub dnp: Length,
}

/// Location reference point (LRP).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub coordinate: Coordinate,
    pub line: LineAttributes,
    /// `None` for the LRP that terminates a line or a point along line.
    pub path: Option<PathAttributes>,
}

impl Point {
    /// Path attributes as written on the wire: a terminal LRP has FRC7 and 0 meters.
    pub fn path_attributes(&self) -> PathAttributes {
        self.path.unwrap_or_default()
    }
}

/// Fraction of the first (positive) or last (negative) LRP path, valid in `[0, 1)`.
/// Zero means there is no offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Offset(f64);

impl Offset {
    pub const fn from_range(range: f64) -> Self {
        Self(range)
    }

    pub const fn range(&self) -> f64 {
        self.0
    }

    pub fn is_present(&self) -> bool {
        self.0 > 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offsets {
    pub pos: Offset,
    pub neg: Offset,
}

impl Offsets {
    /// Positive offset only.
    pub const fn positive(pos: Offset) -> Self {
        Self {
            pos,
            neg: Offset::from_range(0.0),
        }
    }
}

/// A path through the road network: at least two LRPs, the last one without path
/// attributes, trimmed at both ends by the offsets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    pub points: Vec<Point>,
    pub offsets: Offsets,
}

/// The area enclosed by a circuit of roads. Every LRP has path attributes and
/// `last_line` describes the line that leads back to the first LRP.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClosedLine {
    pub points: Vec<Point>,
    pub last_line: LineAttributes,
}

/// A position on the path between two LRPs, `offset` away from the first one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointAlongLine {
    pub points: [Point; 2],
    pub offset: Offset,
    pub orientation: Orientation,
    pub side: SideOfRoad,
}

/// A point of interest reached through an access point along a line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Poi {
    /// The access point.
    pub point: PointAlongLine,
    pub poi: Coordinate,
}

/// Center and integral radius in meters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: Coordinate,
    pub radius: Length,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub lower_left: Coordinate,
    pub upper_right: Coordinate,
}

/// `rect` is the lower left cell, repeated `size.columns` times to the East and
/// `size.rows` times to the North.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    pub rect: Rectangle,
    pub size: GridSize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridSize {
    pub columns: u16,
    pub rows: u16,
}

/// Corners of a simple polygon, the edge from the last corner back to the first is implicit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub corners: Vec<Coordinate>,
}

/// Kind of a [`LocationReference`], in the order of their header type code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum LocationType {
    Circle,
    Line,
    Polygon,
    GeoCoordinate,
    PointAlongLine,
    PoiWithAccessPoint,
    Rectangle,
    Grid,
    ClosedLine,
}

/// Every kind of location the physical format can carry. Line, point along line, POI and
/// closed line are bound to the road network, the others are plain geometries.
#[derive(Clone, Debug, PartialEq)]
pub enum LocationReference {
    Line(Line),
    GeoCoordinate(Coordinate),
    PointAlongLine(PointAlongLine),
    Poi(Poi),
    Circle(Circle),
    Rectangle(Rectangle),
    Grid(Grid),
    Polygon(Polygon),
    ClosedLine(ClosedLine),
}

impl LocationReference {
    pub const fn location_type(&self) -> LocationType {
        use LocationType as Type;

        match self {
            Self::Line(_) => Type::Line,
            Self::GeoCoordinate(_) => Type::GeoCoordinate,
            Self::PointAlongLine(_) => Type::PointAlongLine,
            Self::Poi(_) => Type::PoiWithAccessPoint,
            Self::Circle(_) => Type::Circle,
            Self::Rectangle(_) => Type::Rectangle,
            Self::Grid(_) => Type::Grid,
            Self::Polygon(_) => Type::Polygon,
            Self::ClosedLine(_) => Type::ClosedLine,
        }
    }

    /// Every coordinate of the reference: the POI first, then the LRPs or corners in the
    /// order they are written.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        fn of(points: &[Point]) -> impl Iterator<Item = Coordinate> + '_ {
            points.iter().map(|point| point.coordinate)
        }

        match self {
            Self::Line(Line { points, .. }) | Self::ClosedLine(ClosedLine { points, .. }) => {
                of(points).collect()
            }
            Self::PointAlongLine(PointAlongLine { points, .. }) => of(points).collect(),
            Self::Poi(Poi { point, poi }) => [*poi].into_iter().chain(of(&point.points)).collect(),
            Self::GeoCoordinate(coordinate) => vec![*coordinate],
            Self::Circle(circle) => vec![circle.center],
            Self::Rectangle(rect) | Self::Grid(Grid { rect, .. }) => {
                vec![rect.lower_left, rect.upper_right]
            }
            Self::Polygon(polygon) => polygon.corners.clone(),
        }
    }
}
