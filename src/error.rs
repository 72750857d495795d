use std::io::{self, ErrorKind};

use thiserror::Error;

/// Why bytes or Base64 text could not be decoded into a location reference.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum DeserializeError {
    #[error("not a Base64 encoded OpenLR location reference")]
    InvalidBase64,
    #[error("OpenLR location reference ends before its last field")]
    TruncatedBuffer,
    #[error("cannot read the OpenLR buffer: {0:?}")]
    IO(ErrorKind),
    #[error("unsupported OpenLR version {0}, expected 3")]
    VersionNotSupported(u8),
    #[error("no OpenLR location type matches status byte {0:08b} and the data size")]
    UnknownLocationType(u8),
    #[error("OpenLR radius takes 1 to 4 bytes, found {0}")]
    InvalidRadius(usize),
    #[error("unknown functional road class {0}")]
    InvalidFrc(u8),
    #[error("unknown form of way {0}")]
    InvalidFow(u8),
    #[error("unknown orientation {0}")]
    InvalidOrientation(u8),
    #[error("unknown side of road {0}")]
    InvalidSideOfRoad(u8),
}

/// Why a location reference could not be encoded. Field errors carry the rejected value.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SerializeError {
    #[error("cannot write the OpenLR buffer: {0:?}")]
    IO(ErrorKind),
    #[error("{0} is outside of the absolute degrees range (-180, 180)")]
    InvalidCoordinate(f64),
    #[error("{0} does not fit relative degrees, which span [-0.32768, 0.32767]")]
    InvalidRelativeCoordinate(f64),
    #[error("bearing {0} is outside of [0, 360) degrees")]
    InvalidBearing(f64),
    #[error("distance to the next point {0} m is outside of (0, 15001] m")]
    InvalidDistance(f64),
    #[error("offset {0} is outside of [0, 1)")]
    InvalidOffset(f64),
    #[error("radius {0} m is not a whole number of meters in [0, 4294967295]")]
    InvalidRadius(f64),
    #[error("a line needs at least 2 location reference points")]
    InvalidLine,
    #[error("a polygon needs at least 3 corners")]
    InvalidPolygon,
    #[error("a closed line needs at least 1 location reference point")]
    InvalidClosedLine,
}

impl From<base64::DecodeError> for DeserializeError {
    fn from(_: base64::DecodeError) -> Self {
        Self::InvalidBase64
    }
}

impl From<io::Error> for DeserializeError {
    fn from(error: io::Error) -> Self {
        if error.kind() == ErrorKind::UnexpectedEof {
            Self::TruncatedBuffer
        } else {
            Self::IO(error.kind())
        }
    }
}

impl From<io::Error> for SerializeError {
    fn from(error: io::Error) -> Self {
        Self::IO(error.kind())
    }
}
