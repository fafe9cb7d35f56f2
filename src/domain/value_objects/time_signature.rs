use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Time signature as (numerator, denominator); serialized as `[n, d]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct TimeSignature {
    numerator: u32,
    denominator: u32,
}

impl TimeSignature {
    pub const DEFAULT_COMPONENT: u32 = 4;

    pub fn new(numerator: u32, denominator: u32) -> Result<Self, DomainError> {
        if numerator == 0 || denominator == 0 {
            return Err(DomainError::InvalidTimeSignature {
                numerator,
                denominator,
            });
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    pub fn as_tuple(&self) -> (u32, u32) {
        (self.numerator, self.denominator)
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self {
            numerator: Self::DEFAULT_COMPONENT,
            denominator: Self::DEFAULT_COMPONENT,
        }
    }
}

impl std::fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl TryFrom<(u32, u32)> for TimeSignature {
    type Error = DomainError;

    fn try_from((numerator, denominator): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

impl From<TimeSignature> for (u32, u32) {
    fn from(signature: TimeSignature) -> Self {
        signature.as_tuple()
    }
}
