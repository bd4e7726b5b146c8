//! Error type for the few fallible surfaces: parsing closed enums from text
//! and validating configuration.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroveError {
    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    #[error("unknown feeling: {0}")]
    UnknownFeeling(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
