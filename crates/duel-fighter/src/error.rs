use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FighterError {
    #[error("fighter stat {field} must be positive and finite, got {value}")]
    InvalidStat { field: &'static str, value: f64 },

    #[error("fighter name is empty")]
    EmptyName,
}

pub type FighterResult<T> = Result<T, FighterError>;
