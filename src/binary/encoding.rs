use crate::{
    Bearing, Coordinate, DeserializeError, Fow, Frc, GridSize, Length, LineAttributes,
    LocationType, Offset, Offsets, Orientation, SerializeError, SideOfRoad,
};

/// Rounds half away from zero: 2.5 -> 3 and -2.5 -> -3.
/// This is the rounding every float quantization of the physical format uses, ties must never
/// be rounded to even.
pub fn reference_round(value: f64) -> i64 {
    // f64::round rounds ties away from zero on the exact binary value.
    value.round() as i64
}

/// Converts degrees into a fixed point integer of the given resolution (in bits).
///
/// Values beyond the range of `i64` saturate, which only happens for resolutions above 54 bits.
pub fn degrees_to_fixed(degrees: f64, resolution: u32) -> i64 {
    reference_round(sign(degrees) * 0.5 + degrees * fixed_per_degree(resolution))
}

/// Converts a fixed point integer of the given resolution (in bits) back into degrees.
pub fn fixed_to_degrees(value: i64, resolution: u32) -> f64 {
    let value = value as f64;
    (value - sign(value) * 0.5) / fixed_per_degree(resolution)
}

/// 2^resolution / 360, infinite for resolutions an `f64` cannot hold.
fn fixed_per_degree(resolution: u32) -> f64 {
    f64::from(resolution).exp2() / 360.0
}

/// -1, 0 or 1. Unlike `f64::signum`, zero has no sign.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Two's complement of `value` in N big-endian bytes, if it fits.
pub(crate) fn signed_into_be_bytes<const N: usize>(value: i64) -> Option<[u8; N]> {
    let bits = 8 * N as u32;
    let shifted = value.checked_shl(64 - bits)? >> (64 - bits);
    if shifted != value {
        return None;
    }

    value.to_be_bytes()[8 - N..].try_into().ok()
}

/// `value` in N big-endian bytes, if it is not negative and fits.
pub(crate) fn unsigned_into_be_bytes<const N: usize>(value: i64) -> Option<[u8; N]> {
    let value = u64::try_from(value).ok()?;
    if value.leading_zeros() < 64 - 8 * N as u32 {
        return None;
    }

    value.to_be_bytes()[8 - N..].try_into().ok()
}

/// Sign extends two's complement big-endian bytes (at most 8).
pub(crate) fn signed_from_be_bytes(bytes: &[u8]) -> i64 {
    let unused_bits = 64 - 8 * bytes.len() as u32;
    unsigned_from_be_bytes(bytes)
        .checked_shl(unused_bits)
        .map_or(0, |value| value as i64 >> unused_bits)
}

/// Zero extends big-endian bytes (at most 8).
pub(crate) fn unsigned_from_be_bytes(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0, |value, &byte| (value << 8) | u64::from(byte))
}

impl LocationType {
    /// Returns the location type of a (version 3) header location type code, a few location
    /// types share the same code and can only be told apart by the total size of the data.
    pub const fn from_header(type_code: u8, size: usize) -> Option<Self> {
        let location_type = match type_code {
            0 => Self::Circle,
            1 => Self::Line,
            2 => Self::Polygon,
            4 => Self::GeoCoordinate,
            5 if size > 17 => Self::PoiWithAccessPoint,
            5 => Self::PointAlongLine,
            8 if size > 13 => Self::Grid,
            8 => Self::Rectangle,
            11 => Self::ClosedLine,
            _ => return None,
        };

        Some(location_type)
    }

    pub(crate) const fn header_code(self) -> u8 {
        match self {
            Self::Circle => 0,
            Self::Line => 1,
            Self::Polygon => 2,
            Self::GeoCoordinate => 4,
            Self::PoiWithAccessPoint | Self::PointAlongLine => 5,
            Self::Grid | Self::Rectangle => 8,
            Self::ClosedLine => 11,
        }
    }
}

/// The two attribute bytes of a LRP.
///
/// ```text
/// first byte:  qq ccc fff   q: qualifier, c: FRC, f: FOW
/// second byte: ppp bbbbb    p: path bits, b: bearing sector
/// ```
///
/// The path bits hold the LFRCNP, or the offset flags on the LRP that ends a line or a
/// point along line. The qualifier is the orientation on the first LRP of a point along
/// line, the side of road on its last LRP, and zero everywhere else.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct EncodedAttributes {
    pub(crate) line: LineAttributes,
    pub(crate) qualifier: u8,
    pub(crate) path: u8,
}

impl EncodedAttributes {
    const POS_OFFSET_BIT: u8 = 0b10;
    const NEG_OFFSET_BIT: u8 = 0b01;

    pub(crate) fn from_be_bytes([first, second]: [u8; 2]) -> Result<Self, DeserializeError> {
        let line = LineAttributes {
            frc: Frc::from_bits((first >> 3) & 0b111)?,
            fow: Fow::from_bits(first & 0b111)?,
            bearing: Bearing::from_byte(second & 0b1_1111),
        };

        Ok(Self {
            line,
            qualifier: first >> 6,
            path: second >> 5,
        })
    }

    pub(crate) fn try_into_be_bytes(self) -> Result<[u8; 2], SerializeError> {
        let LineAttributes { frc, fow, bearing } = self.line;
        let first = (self.qualifier & 0b11) << 6 | (frc as u8) << 3 | fow as u8;
        let second = (self.path & 0b111) << 5 | bearing.try_into_byte()?;
        Ok([first, second])
    }

    pub(crate) fn lfrcnp(&self) -> Result<Frc, DeserializeError> {
        Frc::from_bits(self.path)
    }

    pub(crate) const fn has_pos_offset(&self) -> bool {
        self.path & Self::POS_OFFSET_BIT != 0
    }

    pub(crate) const fn has_neg_offset(&self) -> bool {
        self.path & Self::NEG_OFFSET_BIT != 0
    }

    pub(crate) fn orientation(&self) -> Result<Orientation, DeserializeError> {
        Orientation::from_bits(self.qualifier)
    }

    pub(crate) fn side(&self) -> Result<SideOfRoad, DeserializeError> {
        SideOfRoad::from_bits(self.qualifier)
    }
}

impl Offsets {
    /// Path bits of the LRP that ends a line: which of the two offsets follow it.
    pub(crate) fn flags(&self) -> u8 {
        let mut flags = 0;
        if self.pos.is_present() {
            flags |= EncodedAttributes::POS_OFFSET_BIT;
        }
        if self.neg.is_present() {
            flags |= EncodedAttributes::NEG_OFFSET_BIT;
        }
        flags
    }
}

impl Frc {
    fn from_bits(bits: u8) -> Result<Self, DeserializeError> {
        Self::from_repr(bits).ok_or(DeserializeError::InvalidFrc(bits))
    }
}

impl Fow {
    fn from_bits(bits: u8) -> Result<Self, DeserializeError> {
        Self::from_repr(bits).ok_or(DeserializeError::InvalidFow(bits))
    }
}

impl Orientation {
    fn from_bits(bits: u8) -> Result<Self, DeserializeError> {
        Self::from_repr(bits).ok_or(DeserializeError::InvalidOrientation(bits))
    }
}

impl SideOfRoad {
    fn from_bits(bits: u8) -> Result<Self, DeserializeError> {
        Self::from_repr(bits).ok_or(DeserializeError::InvalidSideOfRoad(bits))
    }
}

/// Absolute degrees are 24-bit fixed point values.
const ABSOLUTE_RESOLUTION: u32 = 24;

/// Relative degrees are a signed 16-bit count of 1e-5 degrees.
const RELATIVE_STEPS_PER_DEGREE: f64 = 1e5;

fn absolute_degrees_from_be_bytes(bytes: [u8; 3]) -> f64 {
    fixed_to_degrees(signed_from_be_bytes(&bytes), ABSOLUTE_RESOLUTION)
}

fn absolute_degrees_into_be_bytes(degrees: f64) -> Result<[u8; 3], SerializeError> {
    let invalid = SerializeError::InvalidCoordinate(degrees);
    if !degrees.is_finite() {
        return Err(invalid);
    }
    signed_into_be_bytes(degrees_to_fixed(degrees, ABSOLUTE_RESOLUTION)).ok_or(invalid)
}

fn relative_degrees_from_be_bytes(bytes: [u8; 2]) -> f64 {
    signed_from_be_bytes(&bytes) as f64 / RELATIVE_STEPS_PER_DEGREE
}

fn relative_degrees_into_be_bytes(delta: f64) -> Result<[u8; 2], SerializeError> {
    let invalid = SerializeError::InvalidRelativeCoordinate(delta);
    if !delta.is_finite() {
        return Err(invalid);
    }
    signed_into_be_bytes(reference_round(delta * RELATIVE_STEPS_PER_DEGREE)).ok_or(invalid)
}

impl Coordinate {
    /// Longitude then latitude, 3 bytes each.
    pub(crate) fn from_be_bytes([x1, x2, x3, y1, y2, y3]: [u8; 6]) -> Self {
        Self {
            lon: absolute_degrees_from_be_bytes([x1, x2, x3]),
            lat: absolute_degrees_from_be_bytes([y1, y2, y3]),
        }
    }

    pub(crate) fn try_into_be_bytes(self) -> Result<[u8; 6], SerializeError> {
        let [x1, x2, x3] = absolute_degrees_into_be_bytes(self.lon)?;
        let [y1, y2, y3] = absolute_degrees_into_be_bytes(self.lat)?;
        Ok([x1, x2, x3, y1, y2, y3])
    }

    /// Longitude then latitude deltas to `previous`, 2 bytes each.
    pub(crate) fn from_relative_be_bytes([x1, x2, y1, y2]: [u8; 4], previous: Self) -> Self {
        Self {
            lon: previous.lon + relative_degrees_from_be_bytes([x1, x2]),
            lat: previous.lat + relative_degrees_from_be_bytes([y1, y2]),
        }
    }

    /// Fails without partial output if either delta does not fit.
    pub(crate) fn try_into_relative_be_bytes(
        self,
        previous: Self,
    ) -> Result<[u8; 4], SerializeError> {
        let [x1, x2] = relative_degrees_into_be_bytes(self.lon - previous.lon)?;
        let [y1, y2] = relative_degrees_into_be_bytes(self.lat - previous.lat)?;
        Ok([x1, x2, y1, y2])
    }
}

impl Length {
    /// A DNP byte counts intervals of 58.6 m, so it covers up to about 15 km.
    const DNP_INTERVAL: f64 = 58.6;

    /// The middle of the interval, rounded to whole meters.
    pub(crate) fn from_dnp_byte(interval: u8) -> Self {
        let meters = reference_round((f64::from(interval) + 0.5) * Self::DNP_INTERVAL);
        Self::from_meters(meters as f64)
    }

    pub(crate) fn try_into_dnp_byte(self) -> Result<u8, SerializeError> {
        let meters = self.meters();
        let invalid = SerializeError::InvalidDistance(meters);
        if !meters.is_finite() {
            return Err(invalid);
        }

        let interval = reference_round(meters / Self::DNP_INTERVAL - 0.5);
        unsigned_into_be_bytes::<1>(interval)
            .map(|[interval]| interval)
            .ok_or(invalid)
    }

    /// A radius is a big-endian integer of 1 to 4 bytes.
    pub(crate) fn from_radius_be_bytes(bytes: &[u8]) -> Result<Self, DeserializeError> {
        match bytes.len() {
            0 => Err(DeserializeError::TruncatedBuffer),
            1..=4 => Ok(Self::from_meters(unsigned_from_be_bytes(bytes) as f64)),
            len => Err(DeserializeError::InvalidRadius(len)),
        }
    }

    /// Integral meters in as few bytes as possible, at least one.
    pub(crate) fn try_into_radius_be_bytes(self) -> Result<Vec<u8>, SerializeError> {
        let meters = self.meters();
        if meters.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&meters) {
            return Err(SerializeError::InvalidRadius(meters));
        }

        let bytes = (meters as u32).to_be_bytes();
        let skip = bytes.iter().take(3).take_while(|&&byte| byte == 0).count();
        Ok(bytes[skip..].to_vec())
    }
}

impl Bearing {
    /// 32 sectors of 11.25° each.
    const SECTOR: f64 = 11.25;

    /// The middle of the sector, rounded to whole degrees.
    pub(crate) fn from_byte(sector: u8) -> Self {
        let degrees = (f64::from(sector) + 0.5) * Self::SECTOR;
        Self::from_degrees(reference_round(degrees) as f64)
    }

    pub(crate) fn try_into_byte(self) -> Result<u8, SerializeError> {
        let degrees = self.degrees();
        if !(0.0..360.0).contains(&degrees) {
            return Err(SerializeError::InvalidBearing(degrees));
        }

        // 0° is a tie that rounds to sector -1, which wraps around to the last sector.
        let sector = reference_round((degrees - Self::SECTOR / 2.0) / Self::SECTOR);
        Ok((sector & 0b1_1111) as u8)
    }
}

impl Offset {
    /// 256 buckets of 1/256 of the first (or last) LRP path each.
    const BUCKETS: f64 = 256.0;

    /// The middle of the bucket.
    pub(crate) fn from_byte(bucket: u8) -> Self {
        Self::from_range((f64::from(bucket) + 0.5) / Self::BUCKETS)
    }

    /// Fails for ranges outside of `[0, 1)`, including NaN.
    pub(crate) fn try_into_byte(self) -> Result<u8, SerializeError> {
        let range = self.range();
        let invalid = SerializeError::InvalidOffset(range);
        if !(0.0..1.0).contains(&range) {
            return Err(invalid);
        } else if range == 0.0 {
            return Ok(0);
        }

        unsigned_into_be_bytes::<1>(reference_round(range * Self::BUCKETS - 0.5))
            .map(|[bucket]| bucket)
            .ok_or(invalid)
    }
}

impl GridSize {
    /// Columns then rows, 2 bytes each.
    pub(crate) fn from_be_bytes([c1, c2, r1, r2]: [u8; 4]) -> Self {
        Self {
            columns: u16::from_be_bytes([c1, c2]),
            rows: u16::from_be_bytes([r1, r2]),
        }
    }

    pub(crate) fn into_be_bytes(self) -> [u8; 4] {
        let [c1, c2] = self.columns.to_be_bytes();
        let [r1, r2] = self.rows.to_be_bytes();
        [c1, c2, r1, r2]
    }
}
