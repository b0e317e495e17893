use std::fmt;

/// Which side of the asymptote the sequence starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `start > asymptote`: values fall toward the asymptote.
    Descending,
    /// `start < asymptote`: values rise toward the asymptote.
    Ascending,
}

impl Direction {
    /// `None` when `start == asymptote`.
    pub fn between(start: f64, asymptote: f64) -> Option<Self> {
        if start > asymptote {
            Some(Direction::Descending)
        } else if start < asymptote {
            Some(Direction::Ascending)
        } else {
            None
        }
    }

    /// `+1.0` for descending, `-1.0` for ascending.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Descending => 1.0,
            Direction::Ascending => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Descending => write!(f, "descending"),
            Direction::Ascending => write!(f, "ascending"),
        }
    }
}
