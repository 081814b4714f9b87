// Error handling for combo-template

use std::fmt;

/// Errors raised before any expansion output is produced
#[derive(Debug, Clone, PartialEq)]
pub enum ExpandError {
    InvalidRangeStep { step: f64 },
    InvalidRangeBound { value: f64 },
    ConfigurationConflict(String),
    SegmentMismatch { segments: usize, sources: usize },
    SelectionOutOfRange {
        placeholder: usize,
        index: usize,
        cardinality: usize,
    },
    EmptyPlaceholder { placeholder: usize },
    CountOverflow,
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::InvalidRangeStep { step } => {
                write!(f, "Invalid range step {}: step must be a finite number greater than 0", step)
            }
            ExpandError::InvalidRangeBound { value } => {
                write!(f, "Invalid range bound {}: bounds must be finite numbers", value)
            }
            ExpandError::ConfigurationConflict(msg) => write!(f, "Configuration conflict: {}", msg),
            ExpandError::SegmentMismatch { segments, sources } => write!(
                f,
                "Expected {} literal segments for {} value sources but got {}",
                sources + 1,
                sources,
                segments
            ),
            ExpandError::SelectionOutOfRange {
                placeholder,
                index,
                cardinality,
            } => write!(
                f,
                "Selection {} is out of range for placeholder {} ({} values)",
                index, placeholder, cardinality
            ),
            ExpandError::EmptyPlaceholder { placeholder } => {
                write!(f, "Placeholder {} has no values to choose from", placeholder)
            }
            ExpandError::CountOverflow => write!(f, "Combination count does not fit in 128 bits"),
        }
    }
}

impl std::error::Error for ExpandError {}

pub type Result<T, E = ExpandError> = std::result::Result<T, E>;
