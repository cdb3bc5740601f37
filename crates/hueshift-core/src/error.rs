use std::fmt;

/// Rejected hue operation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HueError {
    /// A shift of a full turn or more was requested. Only deltas in
    /// `(-1, 1)` are accepted.
    DeltaOutOfRange { delta: f32 },
    /// The delta was NaN or infinite.
    NonFinite { delta: f32 },
}

impl HueError {
    #[inline]
    pub fn delta(self) -> f32 {
        match self {
            HueError::DeltaOutOfRange { delta } | HueError::NonFinite { delta } => delta,
        }
    }
}

impl fmt::Display for HueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HueError::DeltaOutOfRange { delta } => {
                write!(f, "hue shift of {delta} turns is outside (-1, 1)")
            }
            HueError::NonFinite { delta } => write!(f, "hue shift {delta} is not finite"),
        }
    }
}

impl std::error::Error for HueError {}
