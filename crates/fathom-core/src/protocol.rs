//! Status codes returned by the command source after each probe.

use crate::error::ProtocolError;
use std::fmt;

/// Outcome of a single movement probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    /// The probe hit a wall; its position has not changed.
    Wall = 0,
    /// The probe moved one step in the requested direction.
    Moved = 1,
    /// The probe moved one step and now stands on the target cell.
    FoundTarget = 2,
}

impl Status {
    /// Wire code for this status.
    pub fn code(self) -> i64 {
        self as u8 as i64
    }

    /// Returns `true` if the probe changed position.
    pub fn moved(self) -> bool {
        !matches!(self, Status::Wall)
    }
}

impl TryFrom<i64> for Status {
    type Error = ProtocolError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Status::Wall),
            1 => Ok(Status::Moved),
            2 => Ok(Status::FoundTarget),
            _ => Err(ProtocolError::UnknownStatus { code }),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Wall => f.write_str("wall"),
            Status::Moved => f.write_str("moved"),
            Status::FoundTarget => f.write_str("found-target"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_known_codes() {
        assert_eq!(Status::try_from(0), Ok(Status::Wall));
        assert_eq!(Status::try_from(1), Ok(Status::Moved));
        assert_eq!(Status::try_from(2), Ok(Status::FoundTarget));
    }

    #[test]
    fn decode_rejects_unknown_codes() {
        assert_eq!(
            Status::try_from(3),
            Err(ProtocolError::UnknownStatus { code: 3 })
        );
        assert_eq!(
            Status::try_from(-1),
            Err(ProtocolError::UnknownStatus { code: -1 })
        );
    }

    #[test]
    fn only_wall_keeps_position() {
        assert!(!Status::Wall.moved());
        assert!(Status::Moved.moved());
        assert!(Status::FoundTarget.moved());
    }
}
