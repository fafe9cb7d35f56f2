use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Project tempo in beats per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tempo(f64);

impl Tempo {
    pub const DEFAULT_BPM: f64 = 120.0;

    pub fn new(bpm: f64) -> Result<Self, DomainError> {
        if !bpm.is_finite() || bpm <= 0.0 {
            return Err(DomainError::InvalidTempo(bpm));
        }

        Ok(Self(bpm))
    }

    pub fn bpm(&self) -> f64 {
        self.0
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self(Self::DEFAULT_BPM)
    }
}

impl std::fmt::Display for Tempo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} BPM", self.0)
    }
}

impl TryFrom<f64> for Tempo {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tempo> for f64 {
    fn from(tempo: Tempo) -> Self {
        tempo.0
    }
}
