use serde::{Deserialize, Serialize};
use yard_types::Error;

/// Work shift (turno). Persisted as its number, 1 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Shift {
    First,
    Second,
    Third,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::First, Shift::Second, Shift::Third];

    pub fn number(self) -> u8 {
        match self {
            Shift::First => 1,
            Shift::Second => 2,
            Shift::Third => 3,
        }
    }

    pub(crate) fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl TryFrom<u8> for Shift {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Shift::First),
            2 => Ok(Shift::Second),
            3 => Ok(Shift::Third),
            other => Err(Error::InvalidShift(other)),
        }
    }
}

impl From<Shift> for u8 {
    fn from(shift: Shift) -> Self {
        shift.number()
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_from_number() {
        assert_eq!(Shift::try_from(2).unwrap(), Shift::Second);
        assert!(matches!(Shift::try_from(0), Err(Error::InvalidShift(0))));
        assert!(matches!(Shift::try_from(4), Err(Error::InvalidShift(4))));
    }

    #[test]
    fn test_shift_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Shift::Third).unwrap(), "3");
        let shift: Shift = serde_json::from_str("1").unwrap();
        assert_eq!(shift, Shift::First);
        assert!(serde_json::from_str::<Shift>("7").is_err());
    }
}
