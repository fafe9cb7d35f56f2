use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid project name: {0}")]
    InvalidProjectName(String),

    #[error("Invalid tempo: {0} (must be a finite, positive BPM value)")]
    InvalidTempo(f64),

    #[error("Invalid time signature: {numerator}/{denominator}")]
    InvalidTimeSignature { numerator: u32, denominator: u32 },
}
