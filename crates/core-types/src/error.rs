use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("A reading set must contain at least one reading")]
    EmptyReadingSet,

    #[error("Invalid glucose value {0}: expected a finite, non-negative mg/dL concentration")]
    InvalidGlucose(f64),
}
