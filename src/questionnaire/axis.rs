use serde::Serialize;
use std::fmt;

/// One pole of a trait axis. Each question scores toward exactly one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Letter {
    A,
    V,
    F,
    E,
    R,
    Q,
    P,
    C,
}

impl Letter {
    pub const ALL: [Letter; 8] = [
        Letter::A,
        Letter::V,
        Letter::F,
        Letter::E,
        Letter::R,
        Letter::Q,
        Letter::P,
        Letter::C,
    ];

    /// The axis this letter belongs to
    pub fn axis(self) -> Axis {
        match self {
            Letter::A | Letter::V => Axis::AV,
            Letter::F | Letter::E => Axis::FE,
            Letter::R | Letter::Q => Axis::RQ,
            Letter::P | Letter::C => Axis::PC,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::V => 'V',
            Letter::F => 'F',
            Letter::E => 'E',
            Letter::R => 'R',
            Letter::Q => 'Q',
            Letter::P => 'P',
            Letter::C => 'C',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Letter::ALL
            .into_iter()
            .find(|l| l.as_char() == c.to_ascii_uppercase())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A bipolar trait dimension.
///
/// Declaration order is the profile code order: the first character of a code
/// is the RQ letter, the last is the AV letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Axis {
    RQ,
    PC,
    FE,
    AV,
}

/// Profile code order
pub const AXIS_SEQUENCE: [Axis; 4] = [Axis::RQ, Axis::PC, Axis::FE, Axis::AV];

impl Axis {
    /// Letter selected by a score >= 0
    pub fn positive(self) -> Letter {
        match self {
            Axis::RQ => Letter::R,
            Axis::PC => Letter::P,
            Axis::FE => Letter::F,
            Axis::AV => Letter::A,
        }
    }

    pub fn negative(self) -> Letter {
        match self {
            Axis::RQ => Letter::Q,
            Axis::PC => Letter::C,
            Axis::FE => Letter::E,
            Axis::AV => Letter::V,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Axis::RQ => "Rapid vs Quality",
            Axis::PC => "Performance vs Code Readability",
            Axis::FE => "Familiar vs Exploration",
            Axis::AV => "Abstract vs Visual",
        }
    }

    /// Short key used in tables and JSON output ("RQ", "PC", ...)
    pub fn key(self) -> &'static str {
        match self {
            Axis::RQ => "RQ",
            Axis::PC => "PC",
            Axis::FE => "FE",
            Axis::AV => "AV",
        }
    }

    /// +1 when `letter` is this axis's positive pole, -1 otherwise
    pub fn orientation(self, letter: Letter) -> i32 {
        if letter == self.positive() {
            1
        } else {
            -1
        }
    }

    /// Position of this axis in the profile code
    pub fn index(self) -> usize {
        match self {
            Axis::RQ => 0,
            Axis::PC => 1,
            Axis::FE => 2,
            Axis::AV => 3,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_letter_maps_to_one_axis() {
        for letter in Letter::ALL {
            let axis = letter.axis();
            assert!(axis.positive() == letter || axis.negative() == letter);
        }
    }

    #[test]
    fn test_axis_sequence_matches_index() {
        for (i, axis) in AXIS_SEQUENCE.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Axis::FE.orientation(Letter::F), 1);
        assert_eq!(Axis::FE.orientation(Letter::E), -1);
        assert_eq!(Axis::PC.orientation(Letter::C), -1);
    }

    #[test]
    fn test_letter_from_char_case_insensitive() {
        assert_eq!(Letter::from_char('q'), Some(Letter::Q));
        assert_eq!(Letter::from_char('C'), Some(Letter::C));
        assert_eq!(Letter::from_char('Z'), None);
    }
}
